//! 一次运行：加载文档、绘制、保存。

use std::path::PathBuf;

use drawing_config::DocumentConfig;
use drawing_core::canvas::{Canvas, ConsoleCanvas};
use drawing_io::{IoError, Registries};
use tracing::{info, warn};

/// 命令行给出的覆盖项，优先于配置文件。
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub render: Option<bool>,
    pub list_kinds: bool,
}

/// 合并配置与覆盖项后的执行计划。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub render: bool,
    pub list_kinds: bool,
}

impl RunPlan {
    pub fn resolve(config: &DocumentConfig, overrides: Overrides) -> Self {
        Self {
            input: overrides.input.or_else(|| config.input.clone()),
            output: overrides.output.or_else(|| config.output.clone()),
            render: overrides.render.unwrap_or(config.render),
            list_kinds: overrides.list_kinds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub shape_count: usize,
    pub saved: bool,
}

pub fn run(plan: &RunPlan) -> Result<RunSummary, IoError> {
    run_with_canvas(plan, &mut ConsoleCanvas)
}

pub fn run_with_canvas(plan: &RunPlan, canvas: &mut dyn Canvas) -> Result<RunSummary, IoError> {
    let registries = Registries::with_builtin_kinds();

    if plan.list_kinds {
        println!("已注册的形状种类：");
        for id in registries.shapes.keys() {
            println!("  - {id}");
        }
    }

    let mut doc = registries.document();
    match &plan.input {
        Some(path) => {
            let count = doc.load(path)?;
            info!(path = %path.display(), count, "已加载文档");
        }
        None => warn!("未指定输入文档，使用空文档"),
    }

    if plan.render {
        println!("绘制 {} 个形状：", doc.len());
        doc.render(canvas);
    }

    if let Some(path) = &plan.output {
        doc.save(path)?;
    }

    Ok(RunSummary {
        shape_count: doc.len(),
        saved: plan.output.is_some(),
    })
}
