//! Command resolution — merging device defaults with a command's overrides
//! into one concrete HTTP request.
//!
//! Resolution is pure: no IO happens here. Executing the resolved request
//! is the transport collaborator's job.

use std::collections::HashMap;

use crate::device::DeviceDescriptor;
use crate::error::ConfigurationError;

/// Default verb when neither the command nor the device specifies one.
const DEFAULT_METHOD: &str = "GET";

/// A fully-resolved HTTP command, ready for a transport to execute.
///
/// Produced by merging device-level fields with command-level overrides:
/// the command's method wins over the device's, headers merge per key with
/// the command side taking precedence, and the body comes from the command
/// alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// HTTP verb, e.g. `"GET"` or `"POST"`.
    pub method: String,
    /// Absolute URL of the device's control endpoint.
    pub url: String,
    /// Resolved header set.
    pub headers: HashMap<String, String>,
    /// Optional request body.
    pub body: Option<String>,
}

impl DeviceDescriptor {
    /// Resolve the request for a power transition.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::MissingPowerUrl`] when the descriptor
    /// has no URL for the requested transition.
    pub fn power_request(&self, power_on: bool) -> Result<CommandRequest, ConfigurationError> {
        let url = if power_on {
            self.power.on_url.as_deref()
        } else {
            self.power.off_url.as_deref()
        };
        let url = url.ok_or_else(|| ConfigurationError::MissingPowerUrl {
            device: self.name.clone(),
            power_on,
        })?;
        Ok(self.resolve(
            url,
            self.power.method.as_deref(),
            &self.power.headers,
            self.power.body.as_deref(),
        ))
    }

    /// Resolve the request for selecting the input source with the given
    /// 1-based identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnknownSourceIdentifier`] when the
    /// identifier falls outside the configured source list, or
    /// [`ConfigurationError::MissingSourceUrl`] when the matching source
    /// has no URL.
    pub fn source_request(&self, identifier: u32) -> Result<CommandRequest, ConfigurationError> {
        let source = identifier
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| self.sources.get(index))
            .ok_or_else(|| ConfigurationError::UnknownSourceIdentifier {
                device: self.name.clone(),
                identifier,
                configured: self.sources.len(),
            })?;
        let url = source
            .url
            .as_deref()
            .ok_or_else(|| ConfigurationError::MissingSourceUrl {
                device: self.name.clone(),
                source_name: source.name.clone(),
            })?;
        Ok(self.resolve(
            url,
            source.method.as_deref(),
            &source.headers,
            source.body.as_deref(),
        ))
    }

    fn resolve(
        &self,
        url: &str,
        method: Option<&str>,
        headers: &HashMap<String, String>,
        body: Option<&str>,
    ) -> CommandRequest {
        let method = method
            .or(self.method.as_deref())
            .unwrap_or(DEFAULT_METHOD)
            .to_string();
        let mut merged = self.headers.clone();
        merged.extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        CommandRequest {
            method,
            url: url.to_string(),
            headers: merged,
            body: body.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{PowerCommands, SourceDescriptor, SourceType};

    fn device() -> DeviceDescriptor {
        DeviceDescriptor {
            name: "Living Room TV".to_string(),
            serial_number: Some("TV1".to_string()),
            model: "TV".to_string(),
            manufacturer: "Generic".to_string(),
            method: None,
            headers: HashMap::new(),
            power: PowerCommands {
                on_url: Some("http://dev/on".to_string()),
                off_url: Some("http://dev/off".to_string()),
                ..PowerCommands::default()
            },
            sources: vec![SourceDescriptor {
                name: "HDMI1".to_string(),
                source_type: SourceType::Hdmi,
                url: Some("http://dev/hdmi1".to_string()),
                method: None,
                headers: HashMap::new(),
                body: None,
            }],
        }
    }

    #[test]
    fn should_pick_on_url_when_powering_on() {
        let request = device().power_request(true).unwrap();
        assert_eq!(request.url, "http://dev/on");
        assert_eq!(request.method, "GET");
        assert!(request.headers.is_empty());
        assert!(request.body.is_none());
    }

    #[test]
    fn should_pick_off_url_when_powering_off() {
        let request = device().power_request(false).unwrap();
        assert_eq!(request.url, "http://dev/off");
    }

    #[test]
    fn should_fail_when_requested_power_url_is_absent() {
        let mut device = device();
        device.power.off_url = None;
        let err = device.power_request(false).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingPowerUrl { power_on: false, .. }
        ));
        // The other direction still resolves.
        assert!(device.power_request(true).is_ok());
    }

    #[test]
    fn should_fall_back_from_command_method_to_device_method_to_get() {
        let mut device = device();
        assert_eq!(device.power_request(true).unwrap().method, "GET");

        device.method = Some("POST".to_string());
        assert_eq!(device.power_request(true).unwrap().method, "POST");

        device.power.method = Some("PUT".to_string());
        assert_eq!(device.power_request(true).unwrap().method, "PUT");
    }

    #[test]
    fn should_merge_command_headers_over_device_headers_per_key() {
        let mut device = device();
        device.headers =
            HashMap::from([("A".to_string(), "1".to_string()), ("B".to_string(), "2".to_string())]);
        device.power.headers =
            HashMap::from([("B".to_string(), "3".to_string()), ("C".to_string(), "4".to_string())]);

        let request = device.power_request(true).unwrap();
        assert_eq!(
            request.headers,
            HashMap::from([
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "3".to_string()),
                ("C".to_string(), "4".to_string()),
            ])
        );
    }

    #[test]
    fn should_take_body_from_the_command_alone() {
        let mut device = device();
        device.power.body = Some("<X_KeyEvent>NRC_POWER-ONOFF</X_KeyEvent>".to_string());
        let request = device.power_request(true).unwrap();
        assert_eq!(request.body.as_deref(), Some("<X_KeyEvent>NRC_POWER-ONOFF</X_KeyEvent>"));

        // Input sources carry their own body, never the power command's.
        let request = device.source_request(1).unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn should_resolve_source_by_one_based_identifier() {
        let request = device().source_request(1).unwrap();
        assert_eq!(request.url, "http://dev/hdmi1");
    }

    #[test]
    fn should_fail_for_out_of_range_source_identifier() {
        let device = device();
        for identifier in [0, 2, 99] {
            let err = device.source_request(identifier).unwrap_err();
            assert!(matches!(
                err,
                ConfigurationError::UnknownSourceIdentifier { identifier: i, configured: 1, .. }
                    if i == identifier
            ));
        }
    }

    #[test]
    fn should_fail_when_source_has_no_url() {
        let mut device = device();
        device.sources[0].url = None;
        let err = device.source_request(1).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingSourceUrl { .. }));
    }

    #[test]
    fn should_apply_source_overrides_over_device_defaults() {
        let mut device = device();
        device.method = Some("POST".to_string());
        device.headers = HashMap::from([("Auth".to_string(), "token".to_string())]);
        device.sources[0].method = Some("PATCH".to_string());
        device.sources[0].body = Some("some body in here instead".to_string());

        let request = device.source_request(1).unwrap();
        assert_eq!(request.method, "PATCH");
        assert_eq!(request.headers["Auth"], "token");
        assert_eq!(request.body.as_deref(), Some("some body in here instead"));
    }
}
