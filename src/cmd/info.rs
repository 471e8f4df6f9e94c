use crate::reports;

pub fn run() {
    reports::print_reference_panel();
}
