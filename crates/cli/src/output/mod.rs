mod console;

pub use console::ConsoleReporter;
