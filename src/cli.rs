use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 主程序的命令行接口（CLI）结构体
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Build TypeScript scripts into WebAssembly through npm"
)]
pub struct Cli {
    /// 项目根目录
    #[arg(long, global = true, default_value = ".")]
    pub dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// 所有支持的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Build the script and write the compiled wasm artifact
    Build {
        /// 调试模式：输出详细的构建日志
        #[arg(long, default_value_t = false)]
        debug: bool,
    },

    /// Install npm dependencies after checking the Node version
    Install,

    /// Print the metadata produced by the last build
    Metadata,

    /// Report dependency status and the installed API library version
    Check,
}
