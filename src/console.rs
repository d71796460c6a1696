//! 控制台前端：一行一条命令，驱动 [`FormController`]。

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use crate::{
    controller::{Action, FormController},
    error::{AdminResult, Error},
    form::{Field, PromotionForm},
    request::Transport,
};

pub const HELP: &str = "\
commands:
  set <field> <value...>   fill a field (id, name, starts_at, ends_at, active)
  unset <field>            empty a field
  create | update | retrieve | delete | clear | search
  show                     print the form and the last search results
  help                     print this message
  quit                     exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Field, String),
    Unset(Field),
    Click(Action),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.find(char::is_whitespace) {
            Some(idx) => (&line[..idx], &line[idx..]),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "set" => {
                // 值只去掉字段名后面的一个分隔符，其余空白原样保留
                let rest = rest.trim_start();
                let (field, value) = match rest.find(char::is_whitespace) {
                    Some(idx) => {
                        let sep = rest[idx..].chars().next().map_or(0, char::len_utf8);
                        (&rest[..idx], &rest[idx + sep..])
                    }
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(Error::Params("usage: set <field> <value...>".to_owned()));
                }
                Ok(Command::Set(field.parse()?, value.to_owned()))
            }
            "unset" => Ok(Command::Unset(rest.trim().parse()?)),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Ok(Command::Click(word.parse()?)),
        }
    }
}

/// 空行和 `#` 开头的注释返回 None
pub fn parse_line(line: &str) -> AdminResult<Option<Command>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    line.parse().map(Some)
}

pub fn render_form(form: &PromotionForm) -> String {
    let mut out = String::new();
    for field in Field::ALL.iter() {
        out.push_str(&format!("{:<10} {}\n", field.as_str(), form.get(*field)));
    }
    out.push_str(&format!("{:<10} {}\n", "message", form.flash_message()));
    if !form.search_results().is_empty() {
        out.push_str(&format!("results\n{}\n", form.search_results()));
    }
    out
}

/// 读取命令直到 EOF 或 `quit`。命令本身出错只打印，不中断循环。
pub fn run<T, R, W>(controller: &mut FormController<T>, input: R, mut output: W) -> AdminResult<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!("bad command {:?}: {}", line, e);
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Set(field, value) => controller.form_mut().set(field, value),
            Command::Unset(field) => controller.form_mut().set(field, ""),
            Command::Click(action) => {
                let outcome = controller.click(action);
                debug!("{} -> {:?}", action, outcome);
                writeln!(output, "{}", controller.form().flash_message())?;
            }
            Command::Show => write!(output, "{}", render_form(controller.form()))?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
        output.flush()?;
    }

    Ok(())
}
