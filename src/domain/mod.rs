// Domain layer - Pure dashboard models and rules
pub mod controls;
pub mod metric;
pub mod series;
pub mod severity;
pub mod snapshot;
pub mod view;
