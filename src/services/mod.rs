pub mod anchor_extractor;
pub mod conflict_resolver;
pub mod schedule_service;
pub mod schedule_utils;
pub mod settings_service;
pub mod task_fitter;
pub mod window_calculator;
