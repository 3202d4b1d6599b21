//! WASM API for the 6502 core.
//!
//! Provides JavaScript-callable interfaces for CPU control and state inspection.

use crate::{ExecutionError, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

fn to_js(error: ExecutionError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// CPU plus 64KB of flat memory, exposed to JavaScript.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Emulator6502 {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.reset();
        Emulator6502 { cpu }
    }

    /// Canonical register state and zeroed memory.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Copies `program` into memory at `start`.
    pub fn load(&mut self, start: u16, program: &[u8]) -> Result<(), JsValue> {
        self.cpu.load(start, program).map_err(to_js)
    }

    /// Loads `program` at `start`, points the reset vector at it and jumps there.
    pub fn boot(&mut self, start: u16, program: &[u8]) -> Result<(), JsValue> {
        self.cpu.load(start, program).map_err(to_js)?;
        self.cpu
            .load(crate::cpu::RESET_ADDRESS, &start.to_le_bytes())
            .map_err(to_js)?;
        self.cpu.load_reset_vector();
        Ok(())
    }

    /// Runs until the budget is spent; returns the number of retired instructions.
    pub fn execute(&mut self, budget: i32) -> Result<u32, JsValue> {
        let report = self.cpu.execute(budget as i64).map_err(to_js)?;
        Ok(report.retired as u32)
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u16 {
        self.cpu.sp()
    }

    /// Packed NV-BDIZC status byte.
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Carry flag.
    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Zero flag.
    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    /// Interrupt disable flag.
    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    /// Decimal flag.
    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    /// Break flag.
    #[wasm_bindgen(getter)]
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    /// Overflow flag.
    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    /// Negative flag.
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn last_opcode(&self) -> Option<u8> {
        self.cpu.last_opcode()
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Copies `len` bytes starting at `start` into a fresh `Uint8Array`.
    pub fn memory_slice(&self, start: u16, len: usize) -> Result<js_sys::Uint8Array, JsValue> {
        let bytes = self.cpu.memory().slice(start, len).map_err(to_js)?;
        Ok(js_sys::Uint8Array::from(bytes))
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
