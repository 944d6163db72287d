//! 集群配置相关类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 敏感字符串（密码等）
///
/// `Debug` 输出会被遮蔽，序列化时保持原始字符串。
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 读取明文
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(****)")
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 集群连接配置
///
/// 以 `name` 作为唯一标识。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterProfile {
    /// 集群名称（唯一、非空）
    pub name: String,
    /// 引导地址列表（host:port）
    #[serde(rename = "bootstrap_servers", default)]
    pub endpoints: Vec<String>,
    /// 用户名
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 密码
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    /// 是否启用 TLS
    #[serde(rename = "ssl", default)]
    pub tls_enabled: bool,
    /// 是否启用 SASL
    #[serde(rename = "sasl", default)]
    pub sasl_enabled: bool,
    /// SASL 机制（PLAIN, SCRAM-SHA-256, SCRAM-SHA-512）
    #[serde(rename = "sasl_type", default, skip_serializing_if = "Option::is_none")]
    pub sasl_mechanism: Option<String>,
}

impl ClusterProfile {
    /// 创建只包含名称和地址的配置
    pub fn new(name: impl Into<String>, endpoints: Vec<String>) -> Self {
        Self {
            name: name.into(),
            endpoints,
            username: None,
            password: None,
            tls_enabled: false,
            sasl_enabled: false,
            sasl_mechanism: None,
        }
    }

    /// 第一个引导地址
    pub fn primary_endpoint(&self) -> Option<&str> {
        self.endpoints.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_is_redacted_in_debug() {
        let mut profile = ClusterProfile::new("local", vec!["localhost:9092".into()]);
        profile.password = Some(Secret::new("hunter2"));

        let debug = format!("{profile:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("Secret(****)"));
    }

    #[test]
    fn serializes_with_config_file_keys() {
        let mut profile = ClusterProfile::new("prod", vec!["a:9092".into(), "b:9092".into()]);
        profile.password = Some(Secret::new("pw"));
        profile.sasl_enabled = true;
        profile.sasl_mechanism = Some("PLAIN".into());

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["bootstrap_servers"][1], "b:9092");
        assert_eq!(json["password"], "pw");
        assert_eq!(json["sasl"], true);
        assert_eq!(json["sasl_type"], "PLAIN");
        assert!(json.get("username").is_none());

        let back: ClusterProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn missing_optional_keys_default() {
        let profile: ClusterProfile = serde_json::from_str(r#"{"name":"bare"}"#).unwrap();
        assert!(profile.endpoints.is_empty());
        assert!(!profile.tls_enabled);
        assert_eq!(profile.primary_endpoint(), None);
    }
}
