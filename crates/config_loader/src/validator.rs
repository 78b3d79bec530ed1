//! 配置校验模块
//!
//! 校验规则（仅在 `log_to_file` 开启时检查）：
//! - log_file_path 非空
//! - log_file_path 指向文件而不是目录

use contracts::{ContractError, DumperConfig};

/// 校验 DumperConfig
///
/// 返回遇到的第一个错误，全部通过则返回 Ok(())。
pub fn validate(config: &DumperConfig) -> Result<(), ContractError> {
    if !config.log_to_file {
        return Ok(());
    }
    validate_log_file_path(config)?;
    Ok(())
}

fn validate_log_file_path(config: &DumperConfig) -> Result<(), ContractError> {
    let path = &config.log_file_path;
    if path.as_os_str().is_empty() {
        return Err(ContractError::config_validation(
            "log_file_path",
            "log_file_path cannot be empty when log_to_file is enabled",
        ));
    }

    let ends_with_separator = path
        .to_str()
        .is_some_and(|s| s.ends_with(std::path::MAIN_SEPARATOR) || s.ends_with('/'));
    if ends_with_separator || path.file_name().is_none() {
        return Err(ContractError::config_validation(
            "log_file_path",
            format!("'{}' does not name a file", path.display()),
        ));
    }
    Ok(())
}
