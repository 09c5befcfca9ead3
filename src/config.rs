use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "script.toml";

/// 项目配置结构体
/// 对应项目根目录下的 script.toml 文件
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectInfo,
    #[serde(default)]
    pub build: BuildConfig,
    pub sdk: Option<SdkConfig>,
}

/// 项目基础元数据
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProjectInfo {
    /// 脚本名称，用于产物命名
    pub name: Option<String>,

    /// 项目语言标识，决定使用哪个 task runner
    pub language: Option<String>,
}

/// 构建配置
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BuildConfig {
    /// 构建产物(.wasm)的输出目录，相对于项目根目录
    pub output_dir: Option<String>,
}

/// SDK 配置
#[derive(Deserialize, Debug, Clone)]
pub struct SdkConfig {
    /// API 库的 npm 包名，`check` 会报告其已安装版本
    pub library: Option<String>,
}

impl ProjectConfig {
    pub fn language(&self) -> &str {
        self.project.language.as_deref().unwrap_or("typescript")
    }

    /// 名称优先级：配置文件 > 项目目录名 > "script"
    pub fn script_name(&self, root: &Path) -> String {
        self.project
            .name
            .clone()
            .or_else(|| {
                root.canonicalize()
                    .ok()
                    .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            })
            .unwrap_or_else(|| "script".to_string())
    }

    pub fn output_dir(&self) -> &str {
        self.build.output_dir.as_deref().unwrap_or(".")
    }

    pub fn library(&self) -> Option<&str> {
        self.sdk.as_ref().and_then(|s| s.library.as_deref())
    }
}

/// 加载项目根目录下的 script.toml
///
/// # 边界说明
/// - 文件不存在时返回默认配置，允许纯 CLI 模式
/// - 文件存在但无法解析时返回错误
pub fn load(root: &Path) -> Result<ProjectConfig> {
    let config_path = root.join(CONFIG_FILE);

    if !config_path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {} content", CONFIG_FILE))?;

    Ok(config)
}
