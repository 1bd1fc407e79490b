//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the datapath. It provides:
//! 1. **Cycles and instructions:** Clock cycles, retired instructions, and derived CPI.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch).
//! 3. **Branches:** How many conditional branches were taken.
//!
//! Host time is not tracked here; the run loop reports it in its summary.

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Clock cycles elapsed, including the cycle that found no instruction.
    pub cycles: u64,
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// Count of register-register and register-immediate instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,
    /// Count of branches whose condition held.
    pub branches_taken: u64,
}

impl SimStats {
    /// Prints the statistics report to stdout.
    ///
    /// Ratios use a floor of one cycle / one instruction so an empty run
    /// prints zeros instead of dividing by zero.
    pub fn print(&self) {
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);
        let pct = |n: u64| (n as f64 / instr as f64) * 100.0;

        println!("\n==========================================================");
        println!("RV32I SINGLE-CYCLE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!(
            "sim_cpi                  {:.4}",
            cyc as f64 / instr as f64
        );
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            pct(self.inst_alu)
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            pct(self.inst_load)
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            pct(self.inst_store)
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            pct(self.inst_branch)
        );
        println!("----------------------------------------------------------");
        println!("BRANCHES");
        let taken_pct = if self.inst_branch == 0 {
            0.0
        } else {
            (self.branches_taken as f64 / self.inst_branch as f64) * 100.0
        };
        println!(
            "  branch.taken           {} ({:.2}%)",
            self.branches_taken, taken_pct
        );
        println!("==========================================================");
    }
}
