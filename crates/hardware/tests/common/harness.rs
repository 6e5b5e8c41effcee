use sim32_core::common::{ExecError, Reg, RegisterFile};
use sim32_core::config::{BaseAddressing, Config};
use sim32_core::Machine;
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per process.
///
/// Honors `RUST_LOG`, e.g. `RUST_LOG=sim32_core=trace cargo test`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A machine plus convenience accessors for register-level tests.
pub struct TestContext {
    pub machine: Machine,
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
        init_tracing();
        Self {
            machine: Machine::new(config),
        }
    }

    /// A context whose LD/PUT resolve the base field through the register file.
    pub fn register_based() -> Self {
        let mut config = Config::default();
        config.memory.base_addressing = BaseAddressing::Register;
        Self::with_config(&config)
    }

    /// A context that logs the register file after every instruction.
    pub fn traced() -> Self {
        let mut config = Config::default();
        config.general.trace_instructions = true;
        Self::with_config(&config)
    }

    pub fn set_reg(&mut self, idx: u32, val: u32) {
        let reg = Reg::new(idx).expect("register index in range");
        self.machine.cpu.regs.write(reg, val);
    }

    pub fn get_reg(&self, idx: u32) -> u32 {
        let reg = Reg::new(idx).expect("register index in range");
        self.machine.cpu.regs.read(reg)
    }

    pub fn regs(&self) -> RegisterFile {
        self.machine.cpu.regs.clone()
    }

    pub fn pc(&self) -> u32 {
        self.machine.cpu.pc
    }

    pub fn set_pc(&mut self, pc: u32) {
        self.machine.cpu.pc = pc;
    }

    /// Executes a single word.
    pub fn exec(&mut self, word: u32) -> Result<(), ExecError> {
        self.machine.step(word)
    }

    /// Executes `words` in order, panicking on the first fault.
    pub fn run(&mut self, words: &[u32]) {
        if let Err((i, e)) = self.machine.run(words) {
            panic!("word {i} ({:#010x}) faulted: {e}", words[i]);
        }
    }

    /// Reads `len` bytes of memory starting at `addr`.
    pub fn mem(&self, addr: usize, len: usize) -> Vec<u8> {
        self.machine.memory.as_slice()[addr..addr + len].to_vec()
    }
}
