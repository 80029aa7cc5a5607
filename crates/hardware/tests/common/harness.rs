use ls8_core::stats::RunStats;
use ls8_core::{Config, Machine, VmError};
use tracing_subscriber::EnvFilter;

/// A machine with captured output, ready for a program.
pub struct TestContext {
    pub machine: Machine<Vec<u8>>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let machine = Machine::new(config, Vec::new()).unwrap();
        Self { machine }
    }

    pub fn load(mut self, image: &[u8]) -> Self {
        self.machine.load_program(image).unwrap();
        self
    }

    pub fn run(&mut self) -> Result<RunStats, VmError> {
        self.machine.run()
    }

    /// Steps `n` instructions, panicking on any error.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            let _ = self.machine.step().unwrap();
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(self.machine.output()).into_owned()
    }

    pub fn output_lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }

    pub fn reg(&self, index: u8) -> u8 {
        self.machine.regs.values()[index as usize]
    }

    pub fn sp(&self) -> u8 {
        self.machine.regs.sp()
    }
}
