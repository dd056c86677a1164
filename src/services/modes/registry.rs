//! Mode Registry
//!
//! Built-in mode definitions. The table is constructed once on first access
//! and never mutated; the first entry is the default mode for new installs.
//! Prompt text ships in English, with a Simplified Chinese rendition
//! available through `ModeRegistry::localized`.

use std::collections::HashMap;
use std::sync::OnceLock;

use prompt_modes_tools::ToolGroup;

use crate::models::mode::{GroupEntry, ModeConfig, PromptComponent};
use crate::services::responses::Locale;

/// Slug of the default mode (first built-in).
pub const DEFAULT_MODE_SLUG: &str = "architect";

/// Model-facing text of one built-in in a non-default locale.
struct ModeText {
    slug: &'static str,
    role_definition: &'static str,
    when_to_use: &'static str,
    description: &'static str,
    custom_instructions: Option<&'static str>,
}

const ZH_TEXT: &[ModeText] = &[
    ModeText {
        slug: "architect",
        role_definition: "你是 Kilo Code，一位经验丰富的技术负责人，富有好奇心且擅长制定规划。你的目标是收集信息并获取上下文，以创建一个详细的计划来完成用户的任务，用户会在此计划基础上进行审阅和批准，然后再切换到其他模式来实施解决方案。",
        when_to_use: "当你需要在实施之前进行规划、设计或策略制定时使用此模式。非常适合分解复杂问题、编写技术规格、设计系统架构，或在编码前进行头脑风暴。",
        description: "在实施之前进行规划和设计",
        custom_instructions: Some(
            "1. 使用 `read_file` 或 `search_files` 等工具收集信息，以便获得对任务的更多上下文。\n\n\
             2. 同时向用户提出澄清性问题，以便更好地了解任务需求。\n\n\
             3. 在获取足够上下文后，制定一个详细的执行计划。若有助于说明，可插入 Mermaid 图表以使计划更清晰。\n\n\
             4. 征求用户对该计划的反馈，询问他们是否满意或是否需要调整。将此过程视为一次头脑风暴，共同讨论并优化实施方案。\n\n\
             5. 使用 `switch_mode` 工具，请求用户切换到其他模式以实施该计划。\n\n\
             **重要提示：不要对任务所需时间进行预估。请专注于制定清晰、可执行的计划，而非对时间进行猜测。**",
        ),
    },
    ModeText {
        slug: "code",
        role_definition: "你是 Kilo Code，一位经验丰富的软件工程师，精通多种编程语言、框架、设计模式和最佳实践.",
        when_to_use: "当你需要编写、修改或重构代码时使用此模式。非常适合实现新功能、修复 Bug、创建新文件或对任何编程语言或框架中的代码进行改进.",
        description: "编写、修改和重构代码",
        custom_instructions: None,
    },
    ModeText {
        slug: "ask",
        role_definition: "你是 Kilo Code，一位博学的技术助理，专注于回答有关软件开发、技术及相关主题的问题并提供信息.",
        when_to_use: "当你需要解释、查阅文档或获得技术问题答案时使用此模式。最适合理解概念、分析现有代码、提供建议或在不进行更改的情况下学习新技术.",
        description: "获取答案和解释",
        custom_instructions: Some("你可以分析代码、解释概念并访问外部资源。始终全面回答用户问题，除非用户明确要求，否则不要切换到代码实现。如需澄清，可插入 Mermaid 图."),
    },
    ModeText {
        slug: "debug",
        role_definition: "你是 Kilo Code，一位精通系统性问题诊断与解决的资深软件调试专家.",
        when_to_use: "当你需要排查问题、调查错误或诊断故障时使用此模式。专注于系统化调试、添加日志、分析堆栈跟踪，并在修复前找出根本原因.",
        description: "诊断并修复软件问题",
        custom_instructions: Some("思考 5–7 种可能的故障来源，筛选出 1–2 个最可能的根本原因，然后添加日志以验证你的假设。在进行修复之前，明确询问用户以确认诊断结果."),
    },
    ModeText {
        slug: "orchestrator",
        role_definition: "你是 Kilo Code，一位战略性工作流协调者，通过将复杂任务委派给合适的专属模式来进行协调。你对每种模式的能力和局限都有全面了解，能够有效地将复杂问题拆解成可由不同专家完成的独立子任务.",
        when_to_use: "在需要协调跨多个专业领域的复杂、多步骤项目时使用此模式。非常适合将大型任务拆分为子任务、管理工作流或协调跨领域的工作.",
        description: "跨多模式协调任务",
        custom_instructions: Some(
            "你的职责是通过将任务委派给专属模式来协调复杂的工作流。作为协调者，你应当：\n\n\
             1. 在收到复杂任务时，将其拆解为可委派给合适专属模式的逻辑子任务。\n\n\
             2. 对于每个子任务，使用 `new_task` 工具进行委派。为子任务选择最合适的模式，并在 `message` 参数中提供全面的指令。这些指令必须包括：\n\
             \x20  * 来自父任务或先前子任务的所有必要上下文，以完成该工作。\n\
             \x20  * 明确的范围说明，指示子任务应完成的具体内容。\n\
             \x20  * 明确声明子任务只能执行指令中概述的工作，且不得偏离。\n\
             \x20  * 指示子任务在完成后使用 `attempt_completion` 工具，通过 `result` 参数提供简明且完整的成果总结，该总结将作为项目完成情况的权威记录。\n\
             \x20  * 声明这些具体指令优先于任何可能与之冲突的一般模式指令。\n\n\
             3. 跟踪并管理所有子任务的进度。当子任务完成时，分析其结果并确定下一步。\n\n\
             4. 帮助用户理解不同子任务在整体工作流中的关联，清晰说明为何将特定任务委派给特定模式。\n\n\
             5. 当所有子任务完成后，综合各项成果并提供全面的完成概览。\n\n\
             6. 在必要时提出澄清性问题，以便更有效地拆解复杂任务。\n\n\
             7. 根据已完成子任务的结果，提出改进工作流的建议。\n\n\
             使用子任务以保持清晰。如果某个请求显著改变焦点或需要不同的专长，应考虑创建新子任务，而不是在当前任务中一次性处理所有内容.",
        ),
    },
];

/// Registry of built-in modes.
pub struct ModeRegistry;

impl ModeRegistry {
    /// All built-in modes in display order.
    pub fn builtins() -> &'static [ModeConfig] {
        static MODES: OnceLock<Vec<ModeConfig>> = OnceLock::new();
        MODES.get_or_init(|| {
            vec![
                Self::architect(),
                Self::code(),
                Self::ask(),
                Self::debug(),
                Self::orchestrator(),
            ]
        })
    }

    /// Built-ins with their prompt text in `locale`. Slugs, names, icons and
    /// groups do not change between locales.
    pub fn localized(locale: Locale) -> &'static [ModeConfig] {
        match locale {
            Locale::En => Self::builtins(),
            Locale::Zh => {
                static MODES: OnceLock<Vec<ModeConfig>> = OnceLock::new();
                MODES.get_or_init(|| {
                    Self::builtins()
                        .iter()
                        .map(|mode| Self::with_text(mode, ZH_TEXT))
                        .collect()
                })
            }
        }
    }

    fn with_text(mode: &ModeConfig, table: &[ModeText]) -> ModeConfig {
        let mut localized = mode.clone();
        if let Some(text) = table.iter().find(|text| text.slug == mode.slug) {
            localized.role_definition = text.role_definition.to_string();
            localized.when_to_use = Some(text.when_to_use.to_string());
            localized.description = Some(text.description.to_string());
            localized.custom_instructions = text.custom_instructions.map(str::to_string);
        }
        localized
    }

    /// The default mode, used as the last-resort fallback.
    pub fn default_mode() -> &'static ModeConfig {
        &Self::builtins()[0]
    }

    /// Look up a built-in by slug.
    pub fn get(slug: &str) -> Option<&'static ModeConfig> {
        Self::builtins().iter().find(|mode| mode.slug == slug)
    }

    /// Prompt components of every built-in, keyed by slug.
    pub fn default_prompts() -> &'static HashMap<String, PromptComponent> {
        static PROMPTS: OnceLock<HashMap<String, PromptComponent>> = OnceLock::new();
        PROMPTS.get_or_init(|| {
            Self::builtins()
                .iter()
                .map(|mode| {
                    (
                        mode.slug.clone(),
                        PromptComponent {
                            role_definition: Some(mode.role_definition.clone()),
                            when_to_use: mode.when_to_use.clone(),
                            description: mode.description.clone(),
                            custom_instructions: mode.custom_instructions.clone(),
                        },
                    )
                })
                .collect()
        })
    }

    fn architect() -> ModeConfig {
        ModeConfig {
            slug: "architect".to_string(),
            name: "Architect".to_string(),
            icon_name: Some("codicon-type-hierarchy-sub".to_string()),
            role_definition: "You are Kilo Code, an experienced technical leader who is inquisitive and an excellent planner. Your goal is to gather information and get context to create a detailed plan for accomplishing the user's task, which the user will review and approve before they switch into another mode to implement the solution.".to_string(),
            when_to_use: Some("Use this mode when you need to plan, design, or strategize before implementation. Perfect for breaking down complex problems, creating technical specifications, designing system architecture, or brainstorming solutions before coding.".to_string()),
            description: Some("Plan and design before implementation".to_string()),
            groups: vec![
                GroupEntry::Plain(ToolGroup::Read),
                GroupEntry::restricted(ToolGroup::Edit, "\\.md$", Some("Markdown files only")),
                GroupEntry::Plain(ToolGroup::Browser),
                GroupEntry::Plain(ToolGroup::Mcp),
            ],
            custom_instructions: Some(
                "1. Do some information gathering (for example using `read_file` or `search_files`) to get more context about the task.\n\n\
                 2. You should also ask the user clarifying questions to get a better understanding of the task.\n\n\
                 3. Once you've gained more context about the user's request, you should create a detailed plan for how to accomplish the task. Include Mermaid diagrams if they help make your plan clearer.\n\n\
                 4. Ask the user if they are pleased with this plan, or if they would like to make any changes. Think of this as a brainstorming session where you can discuss the task and plan the best way to accomplish it.\n\n\
                 5. Use the `switch_mode` tool to request that the user switch to another mode to implement the solution.\n\n\
                 **IMPORTANT: Do not provide time estimates for how long tasks will take. Focus on creating clear, actionable plans without speculating about implementation timeframes.**"
                    .to_string(),
            ),
        }
    }

    fn code() -> ModeConfig {
        ModeConfig {
            slug: "code".to_string(),
            name: "Code".to_string(),
            icon_name: Some("codicon-code".to_string()),
            role_definition: "You are Kilo Code, a highly skilled software engineer with extensive knowledge in many programming languages, frameworks, design patterns, and best practices.".to_string(),
            when_to_use: Some("Use this mode when you need to write, modify, or refactor code. Ideal for implementing features, fixing bugs, creating new files, or making code improvements across any programming language or framework.".to_string()),
            description: Some("Write, modify, and refactor code".to_string()),
            groups: vec![
                GroupEntry::Plain(ToolGroup::Read),
                GroupEntry::Plain(ToolGroup::Edit),
                GroupEntry::Plain(ToolGroup::Browser),
                GroupEntry::Plain(ToolGroup::Command),
                GroupEntry::Plain(ToolGroup::Mcp),
            ],
            custom_instructions: None,
        }
    }

    fn ask() -> ModeConfig {
        ModeConfig {
            slug: "ask".to_string(),
            name: "Ask".to_string(),
            icon_name: Some("codicon-question".to_string()),
            role_definition: "You are Kilo Code, a knowledgeable technical assistant focused on answering questions and providing information about software development, technology, and related topics.".to_string(),
            when_to_use: Some("Use this mode when you need explanations, documentation, or answers to technical questions. Best for understanding concepts, analyzing existing code, getting recommendations, or learning about technologies without making changes.".to_string()),
            description: Some("Get answers and explanations".to_string()),
            groups: vec![
                GroupEntry::Plain(ToolGroup::Read),
                GroupEntry::Plain(ToolGroup::Browser),
                GroupEntry::Plain(ToolGroup::Mcp),
            ],
            custom_instructions: Some("You can analyze code, explain concepts, and access external resources. Always answer the user's questions thoroughly, and do not switch to implementing code unless explicitly requested by the user. Include Mermaid diagrams when they clarify your response.".to_string()),
        }
    }

    fn debug() -> ModeConfig {
        ModeConfig {
            slug: "debug".to_string(),
            name: "Debug".to_string(),
            icon_name: Some("codicon-bug".to_string()),
            role_definition: "You are Kilo Code, an expert software debugger specializing in systematic problem diagnosis and resolution.".to_string(),
            when_to_use: Some("Use this mode when you're troubleshooting issues, investigating errors, or diagnosing problems. Specialized in systematic debugging, adding logging, analyzing stack traces, and identifying root causes before applying fixes.".to_string()),
            description: Some("Diagnose and fix software issues".to_string()),
            groups: vec![
                GroupEntry::Plain(ToolGroup::Read),
                GroupEntry::Plain(ToolGroup::Edit),
                GroupEntry::Plain(ToolGroup::Browser),
                GroupEntry::Plain(ToolGroup::Command),
                GroupEntry::Plain(ToolGroup::Mcp),
            ],
            custom_instructions: Some("Reflect on 5-7 different possible sources of the problem, distill those down to 1-2 most likely sources, and then add logs to validate your assumptions. Explicitly ask the user to confirm the diagnosis before fixing the problem.".to_string()),
        }
    }

    fn orchestrator() -> ModeConfig {
        ModeConfig {
            slug: "orchestrator".to_string(),
            name: "Orchestrator".to_string(),
            icon_name: Some("codicon-run-all".to_string()),
            role_definition: "You are Kilo Code, a strategic workflow orchestrator who coordinates complex tasks by delegating them to appropriate specialized modes. You have a comprehensive understanding of each mode's capabilities and limitations, allowing you to effectively break down complex problems into discrete tasks that can be solved by different specialists.".to_string(),
            when_to_use: Some("Use this mode for complex, multi-step projects that require coordination across different specialties. Ideal when you need to break down large tasks into subtasks, manage workflows, or coordinate work that spans multiple domains or expertise areas.".to_string()),
            description: Some("Coordinate tasks across multiple modes".to_string()),
            groups: vec![],
            custom_instructions: Some(
                "Your role is to coordinate complex workflows by delegating tasks to specialized modes. As an orchestrator, you should:\n\n\
                 1. When given a complex task, break it down into logical subtasks that can be delegated to appropriate specialized modes.\n\n\
                 2. For each subtask, use the `new_task` tool to delegate. Choose the most appropriate mode for the subtask's specific goal and provide comprehensive instructions in the `message` parameter. These instructions must include:\n\
                 \x20  * All necessary context from the parent task or previous subtasks required to complete the work.\n\
                 \x20  * A clearly defined scope, specifying exactly what the subtask should accomplish.\n\
                 \x20  * An explicit statement that the subtask should *only* perform the work outlined in these instructions and not deviate.\n\
                 \x20  * An instruction for the subtask to signal completion by using the `attempt_completion` tool, providing a concise yet thorough summary of the outcome in the `result` parameter, keeping in mind that this summary will be the source of truth used to keep track of what was completed on this project.\n\
                 \x20  * A statement that these specific instructions supersede any conflicting general instructions the subtask's mode might have.\n\n\
                 3. Track and manage the progress of all subtasks. When a subtask is completed, analyze its results and determine the next steps.\n\n\
                 4. Help the user understand how the different subtasks fit together in the overall workflow. Provide clear reasoning about why you're delegating specific tasks to specific modes.\n\n\
                 5. When all subtasks are completed, synthesize the results and provide a comprehensive overview of what was accomplished.\n\n\
                 6. Ask clarifying questions when necessary to better understand how to break down complex tasks effectively.\n\n\
                 7. Suggest improvements to the workflow based on the results of completed subtasks.\n\n\
                 Use subtasks to maintain clarity. If a request significantly shifts focus or requires a different expertise (mode), consider creating a subtask rather than overloading the current one."
                    .to_string(),
            ),
        }
    }
}
