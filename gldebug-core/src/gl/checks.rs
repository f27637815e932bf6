//! Compile-time selection of which checks a [`Debugger`](crate::Debugger) runs.
//!
//! Each level is a zero-sized type; its associated constants are read in
//! `if` conditions, so disabled paths fold away and a checked call costs no
//! more than the bare GL call.
//!
//! | build                                  | [`ActiveChecks`] |
//! |----------------------------------------|------------------|
//! | `debug_assertions`                     | [`Full`]         |
//! | release + feature `check-on-release`   | [`BuildOnly`]    |
//! | release                                | [`Unchecked`]    |

/// A set of enabled checks.
pub trait CheckLevel: 'static {
    /// Call-error checks and [`Debugger::start`](crate::Debugger::start) draining.
    const CALLS: bool;
    /// Shader compile and program link checks.
    const BUILDS: bool;
    /// Name used in log output.
    const NAME: &'static str;
}

/// Every check compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Full;

/// Only shader compile and program link checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOnly;

/// No instrumentation; checked calls are the bare GL operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unchecked;

impl CheckLevel for Full {
    const CALLS: bool = true;
    const BUILDS: bool = true;
    const NAME: &'static str = "full";
}

impl CheckLevel for BuildOnly {
    const CALLS: bool = false;
    const BUILDS: bool = true;
    const NAME: &'static str = "build-only";
}

impl CheckLevel for Unchecked {
    const CALLS: bool = false;
    const BUILDS: bool = false;
    const NAME: &'static str = "unchecked";
}

/// Check level selected by the build configuration.
#[cfg(debug_assertions)]
pub type ActiveChecks = Full;

/// Check level selected by the build configuration.
#[cfg(all(not(debug_assertions), feature = "check-on-release"))]
pub type ActiveChecks = BuildOnly;

/// Check level selected by the build configuration.
#[cfg(all(not(debug_assertions), not(feature = "check-on-release")))]
pub type ActiveChecks = Unchecked;
