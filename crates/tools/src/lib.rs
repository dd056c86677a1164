//! Prompt Modes Tools
//!
//! Constant tool data consumed by the mode registry:
//! - `ToolId` - ordinary (`ToolName`) or experiment-gated (`ExperimentalTool`) tool
//! - `ExperimentId` / `Experiments` - experiment flags and their settings map
//! - `ToolGroup` - group → tool table and the always-available tool set
//! - `switch_mode_description` - prompt text for the mode switching tool
//!
//! Tool execution lives in the host; this crate only names tools.

pub mod descriptions;
pub mod experiments;
pub mod groups;
pub mod names;

pub use descriptions::switch_mode_description;
pub use experiments::{ExperimentId, Experiments};
pub use groups::{is_always_available, ToolGroup, ALWAYS_AVAILABLE_TOOLS};
pub use names::{ExperimentalTool, ToolId, ToolName, UnknownToolError};
