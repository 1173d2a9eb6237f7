use crate::core::Printable;
use crate::printing::ThingPrinter;

/// Print the identity of [`ThingPrinter`] to stdout
pub fn execute_print_thing() {
    ThingPrinter::new().print_identity();
}
