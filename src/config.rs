//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置，敏感字段可由环境变量覆盖

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
    /// 是否允许跨域请求
    #[serde(default = "default_cors")]
    pub cors: bool,
}

/// API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API Key（为空则不启用认证）
    #[serde(default)]
    pub api_key: String,
    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// 连接超时时间（秒）
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// GoldAPI 行情源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldApiConfig {
    /// 接口根地址
    #[serde(default = "default_goldapi_url")]
    pub base_url: String,
    /// 访问令牌（为空时直接使用内置模拟行情）
    #[serde(default)]
    pub access_token: String,
    /// 美元兑卢比汇率
    #[serde(default = "default_usd_to_inr")]
    pub usd_to_inr: f64,
}

/// 本地存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 价格提醒持久化文件
    #[serde(default = "default_alerts_path")]
    pub alerts_path: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// API 配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
    /// 行情源配置
    #[serde(default)]
    pub goldapi: GoldApiConfig,
    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 配置来源，日志系统初始化之后再输出
#[derive(Debug)]
pub enum ConfigOrigin {
    /// 从文件加载
    File(&'static str),
    /// 文件存在但解析失败，已回退到默认值
    Invalid(&'static str, String),
    /// 未找到配置文件
    Default,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_timeout() -> u64 { 10 }
fn default_connect_timeout() -> u64 { 5 }
fn default_cors() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_goldapi_url() -> String { "https://www.goldapi.io/api".to_string() }
fn default_usd_to_inr() -> f64 { 83.5 }
fn default_alerts_path() -> String { "data/alerts.json".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
            cors: default_cors(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GoldApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_goldapi_url(),
            access_token: String::new(),
            usd_to_inr: default_usd_to_inr(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            alerts_path: default_alerts_path(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置，优先从文件，失败则使用默认值；最后应用环境变量覆盖
    ///
    /// 此时日志系统尚未初始化，加载结果通过 [`ConfigOrigin`] 交给调用方记录
    pub fn load() -> (Self, ConfigOrigin) {
        let config_paths = ["config.json", "config/config.json"];

        let (mut config, origin) = config_paths
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(|path| match Self::from_file(path) {
                Ok(config) => (config, ConfigOrigin::File(path)),
                Err(e) => (Self::default(), ConfigOrigin::Invalid(path, e.to_string())),
            })
            .unwrap_or_else(|| (Self::default(), ConfigOrigin::Default));

        config.apply_env_overrides();
        (config, origin)
    }

    /// 环境变量优先于配置文件
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = env::var("API_KEY") {
            self.api.api_key = key;
        }
        if let Ok(token) = env::var("GOLD_API_KEY") {
            self.goldapi.access_token = token;
        }
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
