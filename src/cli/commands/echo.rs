use crate::printing::print_text;

/// Print the given text to stdout followed by a newline
pub fn execute_echo(text: &str) {
    print_text(text);
}
