pub mod breakdown;
pub mod device;
pub mod export;
pub mod load_curve;
pub mod state;
pub mod storage;

use clap::ValueEnum;

/// How the calculator groups the devices in its charts.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ViewMode {
    /// Every device on its own.
    Device,

    /// Devices grouped by category.
    #[default]
    Category,

    /// The whole store as one.
    Total,
}
