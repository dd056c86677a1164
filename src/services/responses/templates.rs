//! Response Templates
//!
//! Fixed messages sent back to the model after tool calls: denials, errors,
//! reminders, and truncation notices. Text is available in English and
//! Simplified Chinese.

use serde::{Deserialize, Serialize};

/// Language of the generated messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    /// Pick a locale from a BCP 47-ish tag such as `zh-CN` or `en-US`.
    /// Unknown or missing tags fall back to English.
    pub fn from_tag(tag: Option<&str>) -> Self {
        let normalized = tag.unwrap_or("en").to_lowercase();
        if normalized.starts_with("zh") {
            Locale::Zh
        } else {
            Locale::En
        }
    }
}

const TOOL_USE_REMINDER_EN: &str = "# Reminder: Instructions for Tool Use

Tool uses are formatted using XML-style tags. The tool name itself becomes the XML tag name. Each parameter is enclosed within its own set of tags. Here's the structure:

<actual_tool_name>
<parameter1_name>value1</parameter1_name>
<parameter2_name>value2</parameter2_name>
...
</actual_tool_name>

For example, to use the attempt_completion tool:

<attempt_completion>
<result>
I have completed the task...
</result>
</attempt_completion>

Always use the actual tool name as the XML tag name for proper parsing and execution.";

const TOOL_USE_REMINDER_ZH: &str = "# 提醒：工具使用说明

工具调用使用 XML 风格标签格式。工具名称即标签名称，每个参数用其自己的标签包裹。结构如下：

<工具名称>
<参数1名称>值1</参数1名称>
<参数2名称>值2</参数2名称>
…
</工具名称>

例如，要调用 attempt_completion 工具：

<attempt_completion>
<result>
我已完成该任务…
</result>
</attempt_completion>

务必使用正确的工具名称作为 XML 标签名称，以确保能够被正确解析和执行。";

/// Builds model-facing response text in a fixed locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseFormatter {
    pub locale: Locale,
}

impl ResponseFormatter {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Formatter for a host language tag, e.g. `zh-CN`.
    pub fn for_language(tag: Option<&str>) -> Self {
        Self::new(Locale::from_tag(tag))
    }

    pub fn tool_use_instructions_reminder(&self) -> &'static str {
        match self.locale {
            Locale::En => TOOL_USE_REMINDER_EN,
            Locale::Zh => TOOL_USE_REMINDER_ZH,
        }
    }

    pub fn duplicate_file_read_notice(&self) -> String {
        match self.locale {
            Locale::En => "[[NOTE] This file read has been removed to save space in the context window. Refer to the latest file read for the most up to date version of this file.]".to_string(),
            Locale::Zh => "[[注意] 为节省上下文窗口空间，此次文件读取已被移除。请参考最新的文件读取以获取此文件的最新版本。]".to_string(),
        }
    }

    pub fn context_truncation_notice(&self) -> String {
        match self.locale {
            Locale::En => "[NOTE] Some previous conversation history with the user has been removed to maintain optimal context window length. The initial user task and the most recent exchanges have been retained for continuity, while intermediate conversation history has been removed. Please keep this in mind as you continue assisting the user.".to_string(),
            Locale::Zh => "[注意] 为保持上下文窗口的最佳长度，部分与用户的历史对话已被移除。已保留最初的用户任务和最近的交互，以确保连贯性，请在继续协助用户时注意这一点。".to_string(),
        }
    }

    pub fn condense(&self) -> String {
        match self.locale {
            Locale::En => "The user has accepted the condensed conversation summary you generated. This summary covers important details of the historical conversation with the user which has been truncated.\n<explicit_instructions type=\"condense_response\">It's crucial that you respond by ONLY asking the user what you should work on next. You should NOT take any initiative or make any assumptions about continuing with work. For example you should NOT suggest file changes or attempt to read any files.\nWhen asking the user what you should work on next, you can reference information in the summary which was just generated. However, you should NOT reference information outside of what's contained in the summary for this response. Keep this response CONCISE.</explicit_instructions>".to_string(),
            Locale::Zh => "用户已接受你生成的精简对话摘要。该摘要涵盖了与用户的历史对话中的重要细节，以下内容已被截断。\n<explicit_instructions type=\"condense_response\">在接下来的回复中，你只需询问用户下一步该做什么。不要主动提出或假设要继续的工作，也不要建议修改文件或再次读取文件。\n在询问用户下一步要做什么时，可以参考刚才摘要中的信息，但不要引用摘要之外的任何内容。请保持回复简洁。</explicit_instructions>".to_string(),
        }
    }

    pub fn tool_denied(&self) -> String {
        match self.locale {
            Locale::En => "The user denied this operation.".to_string(),
            Locale::Zh => "用户已拒绝此操作。".to_string(),
        }
    }

    pub fn tool_denied_with_feedback(&self, feedback: Option<&str>) -> String {
        let feedback = feedback.unwrap_or_default();
        match self.locale {
            Locale::En => format!(
                "The user denied this operation and provided the following feedback:\n<feedback>\n{}\n</feedback>",
                feedback
            ),
            Locale::Zh => format!(
                "用户已拒绝此操作，并提供了以下反馈：\n<feedback>\n{}\n</feedback>",
                feedback
            ),
        }
    }

    pub fn tool_approved_with_feedback(&self, feedback: Option<&str>) -> String {
        let feedback = feedback.unwrap_or_default();
        match self.locale {
            Locale::En => format!(
                "The user approved this operation and provided the following context:\n<feedback>\n{}\n</feedback>",
                feedback
            ),
            Locale::Zh => format!(
                "用户已批准此操作，并提供了以下上下文信息：\n<feedback>\n{}\n</feedback>",
                feedback
            ),
        }
    }

    pub fn tool_error(&self, error: Option<&str>) -> String {
        let error = error.unwrap_or_default();
        match self.locale {
            Locale::En => format!(
                "The tool execution failed with the following error:\n<error>\n{}\n</error>",
                error
            ),
            Locale::Zh => format!("工具执行失败，错误信息如下：\n<error>\n{}\n</error>", error),
        }
    }

    /// Access to `path` was refused by the workspace ignore file.
    pub fn ignore_error(&self, path: &str) -> String {
        match self.locale {
            Locale::En => format!(
                "Access to {} is blocked by the .kilocodeignore file settings. You must try to continue in the task without using this file, or ask the user to update the .kilocodeignore file.",
                path
            ),
            Locale::Zh => format!(
                "因 .kilocodeignore 文件设置，无法访问路径 {}。请在不使用该文件的情况下继续任务，或请用户更新 .kilocodeignore 设置。",
                path
            ),
        }
    }

    pub fn no_tools_used(&self) -> String {
        let reminder = self.tool_use_instructions_reminder();
        match self.locale {
            Locale::En => format!(
                "[ERROR] You did not use a tool in your previous response! Please retry with a tool use.\n\n{}\n\n# Next Steps\n\nIf you have completed the user's task, use the attempt_completion tool. \nIf you require additional information from the user, use the ask_followup_question tool. \nOtherwise, if you have not completed the task and do not need additional information, then proceed with the next step of the task. \n(This is an automated message, so do not respond to it conversationally.)",
                reminder
            ),
            Locale::Zh => format!(
                "[错误] 你在上一次回复中没有使用任何工具！请重新使用工具调用格式后再试。\n\n{}\n\n# 后续步骤\n\t•\t如果你已完成用户的任务，请使用 <attempt_completion> 工具。\n\t•\t如果你需要向用户获取更多信息，请使用 <ask_followup_question> 工具。\n\t•\t否则，如果你尚未完成任务且不需要额外信息，请继续执行任务的下一步。\n（这是自动消息，请勿以对话形式回复。）",
                reminder
            ),
        }
    }

    pub fn too_many_mistakes(&self, feedback: Option<&str>) -> String {
        let feedback = feedback.unwrap_or_default();
        match self.locale {
            Locale::En => format!(
                "You seem to be having trouble proceeding. The user has provided the following feedback to help guide you:\n<feedback>\n{}\n</feedback>",
                feedback
            ),
            Locale::Zh => format!(
                "看起来你在执行过程中遇到了困难。用户提供了以下反馈来帮助你:\n<feedback>\n{}\n</feedback>",
                feedback
            ),
        }
    }

    pub fn missing_tool_parameter_error(&self, param_name: &str) -> String {
        let reminder = self.tool_use_instructions_reminder();
        match self.locale {
            Locale::En => format!(
                "Missing value for required parameter '{}'. Please retry with complete response.\n\n{}",
                param_name, reminder
            ),
            Locale::Zh => format!(
                "缺少必需参数 {} 的值。请提供完整的响应后重试.\n\n{}",
                param_name, reminder
            ),
        }
    }

    /// Guidance after a write whose `line_count` parameter was missing,
    /// usually because the model's output was cut off.
    pub fn line_count_truncation_error(
        &self,
        actual_line_count: usize,
        is_new_file: bool,
        diff_strategy_enabled: bool,
    ) -> String {
        let (search_step, insert_step) = if diff_strategy_enabled { (3, 4) } else { (2, 3) };

        let guidance = match self.locale {
            Locale::En => {
                let truncation = format!(
                    "Note: Your response may have been truncated because it exceeded your output limit. You wrote {} lines of content, but the line_count parameter was either missing or not included in your response.",
                    actual_line_count
                );
                if is_new_file {
                    format!(
                        "This appears to be a new file.\n{}\n\nRECOMMENDED APPROACH:\n\
                         1. Try again with the line_count parameter in your response if you forgot to include it\n\
                         2. Or break your content into smaller chunks - first use write_to_file with the initial chunk\n\
                         3. Then use insert_content to append additional chunks\n",
                        truncation
                    )
                } else {
                    let mut steps = vec![
                        "1. Try again with the line_count parameter in your response if you forgot to include it".to_string(),
                    ];
                    if diff_strategy_enabled {
                        steps.push(
                            "2. Or try using apply_diff instead of write_to_file for targeted changes"
                                .to_string(),
                        );
                    }
                    steps.push(format!(
                        "{}. Or use search_and_replace for specific text replacements",
                        search_step
                    ));
                    steps.push(format!(
                        "{}. Or use insert_content to add specific content at particular lines",
                        insert_step
                    ));
                    format!(
                        "This appears to be content for an existing file.\n{}\n\nRECOMMENDED APPROACH:\n{}\n",
                        truncation,
                        steps.join("\n")
                    )
                }
            }
            Locale::Zh => {
                let truncation = format!(
                    "注意：你的回复可能因超出输出限制而被截断。你共写了 {} 行内容，但响应中缺少或未包含 line_count 参数.",
                    actual_line_count
                );
                if is_new_file {
                    format!(
                        "这似乎是一个新文件。\n{}\n\nRECOMMENDED APPROACH:\n\
                         1. 如果忘记包含 line_count 参数，请在响应中重试并添加该参数\n\
                         2. 或将内容拆分成更小的块 —— 首先使用 write_to_file 写入初始部分\n\
                         3. 然后使用 insert_content 附加剩余内容块\n",
                        truncation
                    )
                } else {
                    let mut steps =
                        vec!["1. 如果忘记包含 line_count 参数，请在响应中重试并添加该参数".to_string()];
                    if diff_strategy_enabled {
                        steps.push(
                            "2. 或者尝试使用 apply_diff 来进行有针对性的修改，而不是 write_to_file"
                                .to_string(),
                        );
                    }
                    steps.push(format!("{}. 或使用 search_and_replace 进行特定文本替换", search_step));
                    steps.push(format!("{}. 或使用 insert_content 在特定行插入内容", insert_step));
                    format!(
                        "这似乎是现有文件的内容.\n{}\n\nRECOMMENDED APPROACH:\n{}\n",
                        truncation,
                        steps.join("\n")
                    )
                }
            }
        };

        format!("{}\n{}", guidance, self.tool_use_instructions_reminder())
    }

    pub fn invalid_mcp_tool_argument_error(&self, server_name: &str, tool_name: &str) -> String {
        format!(
            "Invalid JSON argument used with {} for {}. Please retry with a properly formatted JSON argument.",
            server_name, tool_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_tag() {
        assert_eq!(Locale::from_tag(None), Locale::En);
        assert_eq!(Locale::from_tag(Some("zh-CN")), Locale::Zh);
        assert_eq!(Locale::from_tag(Some("ZH")), Locale::Zh);
        assert_eq!(Locale::from_tag(Some("fr")), Locale::En);
    }

    #[test]
    fn test_feedback_is_wrapped() {
        let fmt = ResponseFormatter::default();
        assert_eq!(
            fmt.tool_denied_with_feedback(Some("use tabs")),
            "The user denied this operation and provided the following feedback:\n<feedback>\nuse tabs\n</feedback>"
        );
        assert!(fmt
            .tool_approved_with_feedback(None)
            .ends_with("<feedback>\n\n</feedback>"));
        assert!(fmt.tool_error(Some("boom")).contains("<error>\nboom\n</error>"));
    }

    #[test]
    fn test_reminder_embedded() {
        for locale in [Locale::En, Locale::Zh] {
            let fmt = ResponseFormatter::new(locale);
            let reminder = fmt.tool_use_instructions_reminder();
            assert!(fmt.no_tools_used().contains(reminder));
            assert!(fmt.missing_tool_parameter_error("path").contains(reminder));
            assert!(fmt.line_count_truncation_error(10, true, false).ends_with(reminder));
        }
    }

    #[test]
    fn test_missing_parameter_names_param() {
        let fmt = ResponseFormatter::default();
        assert!(fmt
            .missing_tool_parameter_error("path")
            .starts_with("Missing value for required parameter 'path'."));
    }

    #[test]
    fn test_line_count_numbering_shifts_with_diff_strategy() {
        let fmt = ResponseFormatter::default();

        let without = fmt.line_count_truncation_error(120, false, false);
        assert!(without.contains("You wrote 120 lines"));
        assert!(without.contains("2. Or use search_and_replace"));
        assert!(without.contains("3. Or use insert_content"));
        assert!(!without.contains("apply_diff"));

        let with = fmt.line_count_truncation_error(120, false, true);
        assert!(with.contains("2. Or try using apply_diff"));
        assert!(with.contains("3. Or use search_and_replace"));
        assert!(with.contains("4. Or use insert_content"));
    }

    #[test]
    fn test_line_count_new_file() {
        let text = ResponseFormatter::default().line_count_truncation_error(5, true, true);
        assert!(text.starts_with("This appears to be a new file.\n"));
        assert!(text.contains("3. Then use insert_content to append additional chunks\n\n# Reminder"));
    }

    #[test]
    fn test_chinese_templates() {
        let fmt = ResponseFormatter::for_language(Some("zh-CN"));
        assert_eq!(fmt.tool_denied(), "用户已拒绝此操作。");
        assert!(fmt.ignore_error("secret.txt").contains("secret.txt"));
        assert!(fmt
            .line_count_truncation_error(3, false, true)
            .contains("4. 或使用 insert_content"));
    }

    #[test]
    fn test_invalid_mcp_argument_is_locale_independent() {
        let en = ResponseFormatter::new(Locale::En).invalid_mcp_tool_argument_error("srv", "tool");
        let zh = ResponseFormatter::new(Locale::Zh).invalid_mcp_tool_argument_error("srv", "tool");
        assert_eq!(en, zh);
        assert_eq!(
            en,
            "Invalid JSON argument used with srv for tool. Please retry with a properly formatted JSON argument."
        );
    }
}
