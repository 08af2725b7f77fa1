use std::path::PathBuf;

use drawing_config::{AppConfig, ConfigError};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod session;

use session::Overrides;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut overrides = Overrides::default();
    let mut config_override: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config_override = Some(require_path(&mut args, "--config")),
            "--input" => overrides.input = Some(require_path(&mut args, "--input")),
            "--output" => overrides.output = Some(require_path(&mut args, "--output")),
            "--no-render" => overrides.render = Some(false),
            "--list-kinds" => overrides.list_kinds = true,
            other => {
                eprintln!("未知参数：{other}");
                std::process::exit(1);
            }
        }
    }

    let config = load_configuration(config_override);
    init_logging(&config);
    info!("启动图形文档工具");

    let plan = session::RunPlan::resolve(&config.document, overrides);
    match session::run(&plan) {
        Ok(summary) => {
            info!(
                shape_count = summary.shape_count,
                saved = summary.saved,
                "运行结束"
            );
        }
        Err(err) => {
            error!(error = %err, "处理文档失败");
            std::process::exit(1);
        }
    }
}

fn require_path(args: &mut impl Iterator<Item = String>, flag: &str) -> PathBuf {
    let Some(path) = args.next() else {
        eprintln!("`{flag}` 需要提供文件路径");
        std::process::exit(1);
    };
    PathBuf::from(path)
}

fn load_configuration(override_path: Option<PathBuf>) -> AppConfig {
    match override_path {
        Some(path) => AppConfig::from_file(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "加载指定配置失败，使用默认配置");
            AppConfig::default()
        }),
        None => match AppConfig::discover() {
            Ok(cfg) => cfg,
            Err(err) => {
                match &err {
                    ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => {
                        warn!(path = %path.display(), error = %err, "加载默认配置失败，使用内建默认值");
                    }
                    ConfigError::Context { .. } => {
                        warn!(error = %err, "加载默认配置失败，使用内建默认值");
                    }
                }
                AppConfig::default()
            }
        },
    }
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_new(config.logging.level.clone()).unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt().with_env_filter(filter);
    if subscriber.try_init().is_err() {
        // 已初始化，忽略
    }
}
