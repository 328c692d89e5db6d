mod bidding;

use crate::console::Console;
use std::io::Cursor;

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// A console that answers each prompt with the next of `answers`
pub fn scripted<I>(answers: I) -> ScriptedConsole
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let script: String = answers
        .into_iter()
        .map(|answer| format!("{}\n", answer.as_ref()))
        .collect();
    Console::new(Cursor::new(script.into_bytes()), Vec::new())
}

/// Everything the console printed so far
pub fn transcript(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
