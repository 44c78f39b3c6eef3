use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. 开发环境默认值
    /// 2. ./nexus.toml
    /// 3. `NEXUS_` 前缀的环境变量（`__` 分隔嵌套字段，如 `NEXUS_SERVER__PORT`）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        Self::figment(path).extract()
    }

    fn figment(path: PathBuf) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("NEXUS_").split("__"))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.chat.xp_per_exchange == 0 {
            return Err(ConfigValidationError::InvalidXpPerExchange);
        }

        if config.chat.xp_per_level == 0 {
            return Err(ConfigValidationError::InvalidXpPerLevel);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("服务端口无效，必须大于 0")]
    InvalidPort,

    #[error("每轮经验值无效，必须大于 0")]
    InvalidXpPerExchange,

    #[error("升级经验值无效，必须大于 0")]
    InvalidXpPerLevel,
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("nexus.toml")
}
