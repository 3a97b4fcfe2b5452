//! Build invocation context
//!
//! Captures the one fact about the current build the signing resolver
//! cares about: whether a release build was requested.

/// Context for a single build invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInvocation {
    is_release_build: bool,
}

impl BuildInvocation {
    /// Create an invocation with an explicit release flag
    pub fn new(is_release_build: bool) -> Self {
        Self { is_release_build }
    }

    /// A release build invocation
    pub fn release() -> Self {
        Self::new(true)
    }

    /// A debug (non-release) build invocation
    pub fn debug() -> Self {
        Self::new(false)
    }

    /// Derive the release flag from the requested task names.
    ///
    /// True iff any task name contains "release", case-insensitive. This is
    /// a substring match, so a task like "prereleaseCheck" also counts.
    pub fn from_task_names<I, S>(task_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let is_release = task_names
            .into_iter()
            .any(|name| name.as_ref().to_lowercase().contains("release"));
        Self::new(is_release)
    }

    /// Whether this invocation is a release build
    pub fn is_release_build(&self) -> bool {
        self.is_release_build
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        assert!(BuildInvocation::release().is_release_build());
        assert!(!BuildInvocation::debug().is_release_build());
        assert!(BuildInvocation::new(true).is_release_build());
    }

    #[test]
    fn test_release_task_detected() {
        let inv = BuildInvocation::from_task_names(["clean", "assembleRelease"]);
        assert!(inv.is_release_build());
    }

    #[test]
    fn test_case_insensitive_match() {
        let inv = BuildInvocation::from_task_names(["bundleRELEASE"]);
        assert!(inv.is_release_build());
    }

    #[test]
    fn test_debug_tasks_not_release() {
        let inv = BuildInvocation::from_task_names(["clean", "assembleDebug", "test"]);
        assert!(!inv.is_release_build());
    }

    #[test]
    fn test_no_tasks_not_release() {
        let inv = BuildInvocation::from_task_names(Vec::<String>::new());
        assert!(!inv.is_release_build());
    }

    // Inherited substring heuristic: any task containing "release" counts,
    // even when it is not a release build task.
    #[test]
    fn test_substring_false_positive() {
        let inv = BuildInvocation::from_task_names(["prereleaseCheck"]);
        assert!(inv.is_release_build());
    }
}
