//! Start-up configuration, read from the page's query string.

use crate::constants::{CAMERA_Z, CLICK_MIN_INTERVAL_SEC};
use crate::error::AbacusError;
use crate::layout::Layout;

#[derive(Clone, Debug, PartialEq)]
pub struct AbacusConfig {
    pub layout: Layout,
    pub camera_distance: f32,
    pub click_interval_sec: f64,
    pub sound: bool,
}

impl Default for AbacusConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            camera_distance: CAMERA_Z,
            click_interval_sec: CLICK_MIN_INTERVAL_SEC,
            sound: true,
        }
    }
}

impl AbacusConfig {
    /// Parse `?layout=free&sound=off`. Unknown keys are ignored; the first
    /// malformed value is returned as an error.
    pub fn from_query(search: &str) -> Result<Self, AbacusError> {
        let mut cfg = Self::default();
        for (key, value) in query_pairs(search) {
            match key {
                "layout" => cfg.layout = value.parse()?,
                "sound" => {
                    cfg.sound = parse_switch(value).ok_or_else(|| AbacusError::InvalidParam {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?
                }
                _ => {}
            }
        }
        Ok(cfg)
    }
}

/// `key=value` pairs of a query string, with or without the leading `?`.
pub fn query_pairs(search: &str) -> impl Iterator<Item = (&str, &str)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|p| p.split_once('=').unwrap_or((p, "")))
}

#[inline]
fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "off" | "false" | "no" => Some(false),
        _ => None,
    }
}
