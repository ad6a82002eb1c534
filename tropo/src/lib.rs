//! # Tropospheric ducting alerts
//!
//! `tropo` turns a single surface weather observation into a ducting
//! index through a four level modified refractivity profile, grades it
//! into an [`AlertLevel`] and decides whether to page it.
//!
//! Network access lives behind the [`WeatherSource`] and [`Notifier`]
//! traits.

pub mod alert;
pub mod diagnostic;
mod error;
pub mod message;
pub mod notify;
pub mod profile;
pub mod refractivity;
pub mod run;
pub mod weather;

pub use crate::{
    alert::{classify, AlertLevel},
    diagnostic::{Diagnostic, LogObserver, Observer},
    error::{ComputeError, NotifyError, RunError, Source, WeatherError},
    message::format_message,
    notify::{Delivery, Notifier, PagingCall},
    profile::{compute_index, Level, LevelSample, Profile, TropoIndex},
    refractivity::refractivity,
    run::{assess, dispatch, run, Assessment, Config, Outcome, Report},
    weather::{
        Location, ParseLocationError, WeatherSnapshot, WeatherSource, DEFAULT_HUMIDITY_PCT,
        DEFAULT_PRESSURE_HPA,
    },
};
