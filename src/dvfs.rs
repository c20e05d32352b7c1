//! Dynamic voltage and frequency scaling governor.
//!
//! The simulated monitor chip cycles through a fixed sequence of operating
//! modes while it runs. Each switch reconfigures a three-stage pipeline, gates
//! or re-activates power islands and clock-gates idle units. All of this is
//! reported through `tracing` only; it never touches the status output.

use std::fmt;

use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DvfsMode {
    HighPerf,
    Normal,
    LowPower,
    Sleep,
}

/// Order in which the governor walks through the modes, wrapping around.
pub const DVFS_SEQUENCE: [DvfsMode; 4] = [
    DvfsMode::Normal,
    DvfsMode::HighPerf,
    DvfsMode::LowPower,
    DvfsMode::Sleep,
];

impl DvfsMode {
    pub fn name(self) -> &'static str {
        match self {
            DvfsMode::HighPerf => "high_perf",
            DvfsMode::Normal => "normal",
            DvfsMode::LowPower => "low_power",
            DvfsMode::Sleep => "sleep",
        }
    }

    pub fn clock(self) -> &'static str {
        match self {
            DvfsMode::HighPerf => "48MHz",
            DvfsMode::Normal => "24MHz",
            DvfsMode::LowPower => "8MHz",
            DvfsMode::Sleep => "32kHz",
        }
    }

    pub fn voltage(self) -> &'static str {
        match self {
            DvfsMode::HighPerf => "1.2V",
            DvfsMode::Normal => "1.0V",
            DvfsMode::LowPower => "0.8V",
            DvfsMode::Sleep => "0.6V",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DvfsMode::HighPerf => "Intensive ECG signal processing",
            DvfsMode::Normal => "Standard ECG monitoring",
            DvfsMode::LowPower => "Background monitoring",
            DvfsMode::Sleep => "Maintenance operations",
        }
    }

    pub fn pipeline_mode(self) -> PipelineMode {
        match self {
            DvfsMode::HighPerf => PipelineMode::FullThroughput,
            DvfsMode::Normal => PipelineMode::Balanced,
            DvfsMode::LowPower => PipelineMode::Conservative,
            DvfsMode::Sleep => PipelineMode::Minimal,
        }
    }

    /// Islands that must be powered while in this mode.
    pub fn power_islands(self) -> &'static [PowerIsland] {
        match self {
            DvfsMode::HighPerf => &PowerIsland::ALL,
            DvfsMode::Normal => &[PowerIsland::Core, PowerIsland::Cache, PowerIsland::Io],
            DvfsMode::LowPower | DvfsMode::Sleep => &[PowerIsland::Core],
        }
    }
}

impl fmt::Display for DvfsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    FullThroughput,
    Balanced,
    Conservative,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PowerLevel {
    Minimal,
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Fetch,
    DecodeExecute,
    MemoryWriteback,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 3] = [
        PipelineStage::Fetch,
        PipelineStage::DecodeExecute,
        PipelineStage::MemoryWriteback,
    ];

    fn index(self) -> usize {
        match self {
            PipelineStage::Fetch => 0,
            PipelineStage::DecodeExecute => 1,
            PipelineStage::MemoryWriteback => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerIsland {
    Core,
    Cache,
    Dsp,
    Io,
}

impl PowerIsland {
    pub const ALL: [PowerIsland; 4] = [
        PowerIsland::Core,
        PowerIsland::Cache,
        PowerIsland::Dsp,
        PowerIsland::Io,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PowerIsland::Core => "core",
            PowerIsland::Cache => "cache",
            PowerIsland::Dsp => "dsp",
            PowerIsland::Io => "io",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageState {
    pub active: bool,
    pub level: PowerLevel,
}

/// Islands switched off and on by one reconfiguration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IslandChanges {
    pub gated: Vec<PowerIsland>,
    pub activated: Vec<PowerIsland>,
}

/// Power state of the simulated chip.
#[derive(Debug, Clone)]
pub struct PowerManager {
    stages: [StageState; 3],
    active_islands: Vec<PowerIsland>,
    clock_gated_units: Vec<&'static str>,
}

impl Default for PowerManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerManager {
    /// Everything powered, all stages at normal level, nothing gated.
    pub fn new() -> Self {
        Self {
            stages: [StageState {
                active: true,
                level: PowerLevel::Normal,
            }; 3],
            active_islands: PowerIsland::ALL.to_vec(),
            clock_gated_units: Vec::new(),
        }
    }

    pub fn stage(&self, stage: PipelineStage) -> StageState {
        self.stages[stage.index()]
    }

    pub fn active_stages(&self) -> Vec<PipelineStage> {
        PipelineStage::ALL
            .into_iter()
            .filter(|stage| self.stage(*stage).active)
            .collect()
    }

    pub fn active_islands(&self) -> &[PowerIsland] {
        &self.active_islands
    }

    pub fn clock_gated_units(&self) -> &[&'static str] {
        &self.clock_gated_units
    }

    pub fn configure_pipeline(&mut self, mode: PipelineMode) {
        let (fetch, decode_execute, memory_writeback) = match mode {
            PipelineMode::Minimal => (
                (true, PowerLevel::Minimal),
                (false, PowerLevel::Minimal),
                (false, PowerLevel::Minimal),
            ),
            PipelineMode::Conservative => (
                (true, PowerLevel::Low),
                (true, PowerLevel::Low),
                (true, PowerLevel::Minimal),
            ),
            PipelineMode::Balanced => (
                (true, PowerLevel::Normal),
                (true, PowerLevel::Normal),
                (true, PowerLevel::Normal),
            ),
            PipelineMode::FullThroughput => (
                (true, PowerLevel::High),
                (true, PowerLevel::High),
                (true, PowerLevel::High),
            ),
        };

        for (stage, (active, level)) in PipelineStage::ALL
            .into_iter()
            .zip([fetch, decode_execute, memory_writeback])
        {
            self.stages[stage.index()] = StageState { active, level };
            debug!(?stage, active, ?level, "pipeline stage configured");
        }
    }

    /// Gates islands not in `required` and powers up the missing ones.
    pub fn manage_power_islands(&mut self, required: &[PowerIsland]) -> IslandChanges {
        let mut changes = IslandChanges::default();

        for island in PowerIsland::ALL {
            let active = self.active_islands.contains(&island);
            let needed = required.contains(&island);

            if active && !needed {
                changes.gated.push(island);
            } else if !active && needed {
                changes.activated.push(island);
            }
        }

        self.active_islands = PowerIsland::ALL
            .into_iter()
            .filter(|island| required.contains(island))
            .collect();

        changes
    }

    pub fn apply_clock_gating(&mut self, mode: DvfsMode) {
        self.clock_gated_units.clear();

        match mode.pipeline_mode() {
            PipelineMode::Minimal => self.clock_gated_units.extend([
                "decode_execute_stage",
                "memory_writeback_stage",
                "branch_predictor",
                "advanced_alu_units",
            ]),
            PipelineMode::Conservative => self.clock_gated_units.extend([
                "unused_fetch_ports",
                "secondary_decode_units",
                "write_buffer_entries",
            ]),
            PipelineMode::Balanced | PipelineMode::FullThroughput => {}
        }

        let description = mode.description();
        if description.contains("Background") {
            self.clock_gated_units
                .extend(["dsp_units", "unused_cache_ways"]);
        } else if description.contains("Maintenance") {
            self.clock_gated_units
                .extend(["dsp_units", "cache_prefetch", "io_peripherals"]);
        }
    }
}

/// Switches the operating mode every `switch_batches` completed batches.
#[derive(Debug, Clone)]
pub struct DvfsGovernor {
    switch_batches: u64,
    next: usize,
    current: Option<DvfsMode>,
    transitions: u64,
    power: PowerManager,
}

impl DvfsGovernor {
    pub fn new(switch_batches: u64) -> Self {
        Self {
            switch_batches,
            next: 0,
            current: None,
            transitions: 0,
            power: PowerManager::new(),
        }
    }

    pub fn current_mode(&self) -> Option<DvfsMode> {
        self.current
    }

    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn power(&self) -> &PowerManager {
        &self.power
    }

    /// Called after each batch; switches mode when the interval elapses.
    pub fn on_batch_complete(&mut self, batches: u64) -> Option<DvfsMode> {
        if self.switch_batches == 0 || batches % self.switch_batches != 0 {
            return None;
        }

        Some(self.transition())
    }

    pub fn transition(&mut self) -> DvfsMode {
        let mode = DVFS_SEQUENCE[self.next % DVFS_SEQUENCE.len()];
        self.next = (self.next + 1) % DVFS_SEQUENCE.len();

        info!(
            mode = mode.name(),
            clock = mode.clock(),
            voltage = mode.voltage(),
            "DVFS: {}",
            mode.description()
        );

        self.power.configure_pipeline(mode.pipeline_mode());

        let changes = self.power.manage_power_islands(mode.power_islands());
        if !changes.gated.is_empty() {
            info!("power islands gated: {}", join_islands(&changes.gated));
        }
        if !changes.activated.is_empty() {
            info!("power islands activated: {}", join_islands(&changes.activated));
        }

        self.power.apply_clock_gating(mode);
        if !self.power.clock_gated_units().is_empty() {
            info!(
                "clock gated units: {}",
                self.power.clock_gated_units().join(", ")
            );
        }

        debug!(
            active_stages = self.power.active_stages().len(),
            active_islands = %join_islands(self.power.active_islands()),
            "pipeline status"
        );

        self.current = Some(mode);
        self.transitions += 1;
        mode
    }
}

fn join_islands(islands: &[PowerIsland]) -> String {
    islands
        .iter()
        .map(|island| island.name())
        .collect::<Vec<_>>()
        .join(", ")
}
