//! `grep`: regular-expression matching.
//!
//! If the first operand names a file, its lines are searched. Otherwise the
//! operands themselves are the input, one per candidate line. The second
//! form is what makes `echo "a" | grep a` work, since piped output arrives
//! as trailing operands.

use regex::Regex;

use crate::core::error::CommandError;
use crate::core::path::evaluate;
use crate::core::session::ShellState;
use crate::core::VirtualFs;

use super::CommandResult;

/// Execute `grep` with its pattern and remaining operands.
///
/// A pattern with no operand at all prints usage, even though the pattern
/// alone could have been matched against nothing.
pub fn execute_grep(
    pattern: Option<String>,
    operands: &[String],
    state: &ShellState,
    fs: &VirtualFs,
) -> Result<CommandResult, CommandError> {
    let (Some(pattern), Some(first)) = (pattern, operands.first()) else {
        return Err(CommandError::GrepUsage);
    };

    let regex = Regex::new(&pattern).map_err(|_| CommandError::GrepInvalidPattern(pattern))?;

    let resolved = evaluate(first, &state.working_directory);
    if let Some(entry) = fs.lookup(&resolved, false).and_then(|index| fs.get(index)) {
        let Some(content) = entry.content() else {
            return Err(CommandError::GrepIsDirectory(first.clone()));
        };
        return Ok(CommandResult::output(matching(&regex, content.lines())));
    }

    Ok(CommandResult::output(matching(
        &regex,
        operands.iter().map(String::as_str),
    )))
}

/// Keep the candidates the regex matches anywhere in.
fn matching<'a>(regex: &Regex, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    candidates
        .filter(|line| regex.is_match(line))
        .map(str::to_string)
        .collect()
}
