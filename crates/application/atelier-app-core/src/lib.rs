pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod exporter;
pub mod orchestrator;
pub mod persistence;
pub mod ports;
pub mod viewmodel;

pub use app::AtelierApplication;
pub use app_core::*;
pub use domain::{
    AppState, DocumentPhase, Notice, NoticeKind, Route, RunId, SettingsDraft, StudioSettings,
    GENERATION_FAILURE_NOTICE,
};
pub use ports::*;
pub use viewmodel::*;
