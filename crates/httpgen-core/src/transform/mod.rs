pub mod example;

pub use example::ExampleResolver;
