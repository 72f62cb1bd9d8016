//! Pipeline stages and hook timings.

use std::fmt;

/// A fixed position in the request-handling chain.
///
/// The ordinal order is exactly the declaration order below and is not
/// reconfigurable. The last three stages are branching (terminating): each one
/// decides per request whether to consume it, and nothing host-configured runs
/// after a terminating stage on that request's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Cross-origin request filtering.
    Cors,
    /// Authentication; establishes the current user for the request.
    Authentication,
    /// Membership extension (dynamic group assignment) for the current user.
    MembershipExtension,
    /// Binary/file download branch. Terminating.
    FilesBranch,
    /// OData API branch. Terminating.
    ODataBranch,
    /// WOPI (office-integration) protocol branch. Terminating.
    WopiBranch,
}

impl Stage {
    /// All stages in fixed chain order.
    pub const ALL: [Stage; 6] = [
        Stage::Cors,
        Stage::Authentication,
        Stage::MembershipExtension,
        Stage::FilesBranch,
        Stage::ODataBranch,
        Stage::WopiBranch,
    ];

    /// Fixed position of this stage in the chain.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Whether this stage is a branching (terminating) stage.
    ///
    /// Terminating stages support `before` hooks only: once the branch
    /// commits, an `after` position is unreachable.
    pub fn is_terminating(self) -> bool {
        matches!(
            self,
            Stage::FilesBranch | Stage::ODataBranch | Stage::WopiBranch
        )
    }

    /// Stable textual name of the stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Cors => "Cors",
            Stage::Authentication => "Authentication",
            Stage::MembershipExtension => "MembershipExtension",
            Stage::FilesBranch => "FilesBranch",
            Stage::ODataBranch => "ODataBranch",
            Stage::WopiBranch => "WopiBranch",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Placement of a hook relative to its stage's own handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTiming {
    /// Run immediately before the stage's handler.
    Before,
    /// Run immediately after the stage's handler. Only valid on
    /// non-terminating stages.
    After,
}

impl fmt::Display for HookTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookTiming::Before => "before",
            HookTiming::After => "after",
        })
    }
}
