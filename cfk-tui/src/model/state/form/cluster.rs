//! 集群配置表单

use cfk_core::{ClusterProfile, Secret};

use super::{FieldSpec, FieldValue, FormEntity, FormError};

const NAME: usize = 0;
const ENDPOINTS: usize = 1;
const USERNAME: usize = 2;
const PASSWORD: usize = 3;
const TLS: usize = 4;
const SASL: usize = 5;
const MECHANISM: usize = 6;

fn text(values: &[FieldValue], index: usize) -> &str {
    values.get(index).map_or("", FieldValue::as_text).trim()
}

fn optional(values: &[FieldValue], index: usize) -> Option<String> {
    Some(text(values, index).to_string()).filter(|s| !s.is_empty())
}

impl FormEntity for ClusterProfile {
    type Key = String;

    const ADD_TITLE: &'static str = "Add Cluster";
    const EDIT_TITLE: &'static str = "Edit Cluster";

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::text("Name", "local"),
        FieldSpec::text("Bootstrap Servers", "localhost:9092, localhost:9093"),
        FieldSpec::text("Username", "(optional)"),
        FieldSpec::secret("Password", "(optional)"),
        FieldSpec::toggle("TLS"),
        FieldSpec::toggle("SASL"),
        FieldSpec::text("SASL Mechanism", "PLAIN, SCRAM-SHA-256, SCRAM-SHA-512"),
    ];

    const IDENTITY_FIELD: usize = NAME;

    fn identity(&self) -> String {
        self.name.clone()
    }

    fn to_values(&self) -> Vec<FieldValue> {
        vec![
            FieldValue::Text(self.name.clone()),
            FieldValue::Text(self.endpoints.join(", ")),
            FieldValue::Text(self.username.clone().unwrap_or_default()),
            FieldValue::Text(
                self.password
                    .as_ref()
                    .map(|p| p.expose().to_string())
                    .unwrap_or_default(),
            ),
            FieldValue::Toggle(self.tls_enabled),
            FieldValue::Toggle(self.sasl_enabled),
            FieldValue::Text(self.sasl_mechanism.clone().unwrap_or_default()),
        ]
    }

    fn from_values(values: &[FieldValue], _original: Option<&Self>) -> Result<Self, FormError> {
        let name = text(values, NAME);
        if name.is_empty() {
            return Err(FormError::InvalidInput("cluster name is required".to_string()));
        }

        let endpoints = text(values, ENDPOINTS)
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            name: name.to_string(),
            endpoints,
            username: optional(values, USERNAME),
            password: optional(values, PASSWORD).map(Secret::from),
            tls_enabled: values.get(TLS).is_some_and(FieldValue::as_toggle),
            sasl_enabled: values.get(SASL).is_some_and(FieldValue::as_toggle),
            sasl_mechanism: optional(values, MECHANISM),
        })
    }
}
