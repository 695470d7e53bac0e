use hashbrown::HashMap;

use crate::{String, Vec, asm::Instruction};

/// Append-only accumulator for one compilation unit.
///
/// Holds the instruction sequence and the label table while lowering runs.
/// Once appended, an instruction's position never changes (no reordering, no
/// deletion): labels capture positions by index, so any rewrite would
/// invalidate them.
///
/// The builder also tracks the exact operand-stack depth of the instruction
/// stream as it grows, which lets the compiler assert the stack-balance
/// invariant and lets the finished [`Program`] carry an exact
/// `max_stack_size`.
#[derive(Debug, Default)]
pub struct CodeBuilder {
    instructions: Vec<Instruction>,
    labels: HashMap<String, usize>,
    stack_depth: usize,
    max_stack_size: usize,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of instructions appended so far. This is also the index the
    /// next appended instruction will occupy.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Current operand-stack depth of the instruction stream.
    pub fn stack_depth(&self) -> usize {
        self.stack_depth
    }

    /// Append an instruction to the end of the sequence.
    pub fn push_instruction(&mut self, instruction: Instruction) {
        let pops = instruction.pops();
        debug_assert!(
            self.stack_depth >= pops,
            "Stack underflow: {:?} pops {} but depth is {}",
            instruction,
            pops,
            self.stack_depth
        );
        self.stack_depth = self.stack_depth - pops + 1;
        if self.stack_depth > self.max_stack_size {
            self.max_stack_size = self.stack_depth;
        }
        self.instructions.push(instruction);
    }

    /// Record the current sequence length under `name`.
    ///
    /// The recorded index is the position the next appended instruction will
    /// occupy, which is how collaborators mark jump/branch targets. Label
    /// uniqueness is the surrounding system's contract: re-declaring a name
    /// overwrites the previous entry (last one wins).
    pub fn push_label(&mut self, name: &str) {
        let position = self.instructions.len();
        tracing::debug!(name, position, "declaring label");
        if let Some(previous) = self.labels.insert(String::from(name), position) {
            tracing::warn!(name, previous, position, "label re-declared");
        }
    }

    /// Finalize the unit and hand off the read-only program.
    ///
    /// Defined to be called only after all appends for the unit are complete.
    pub fn finish(self) -> Program {
        Program {
            instructions: self.instructions,
            labels: self.labels,
            max_stack_size: self.max_stack_size,
        }
    }
}

/// A finished compilation unit: the instruction sequence and label table,
/// immutable from here on. This is what the printer/assembler consumes.
pub struct Program {
    pub instructions: Vec<Instruction>,
    pub labels: HashMap<String, usize>,
    pub max_stack_size: usize,
}

impl core::fmt::Debug for Program {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Program {{")?;
        writeln!(f, "  max_stack_size: {}", self.max_stack_size)?;

        // Group labels by position, sorted for deterministic output.
        let mut by_position: Vec<(&str, usize)> = self
            .labels
            .iter()
            .map(|(name, &position)| (name.as_str(), position))
            .collect();
        by_position.sort();

        writeln!(f, "  instructions:")?;
        for (addr, instr) in self.instructions.iter().enumerate() {
            for &(name, position) in &by_position {
                if position == addr {
                    writeln!(f, "  {name}:")?;
                }
            }
            writeln!(f, "    {:4}  {:?}", addr, instr)?;
        }
        // Labels declared after the last instruction point one past the end.
        for &(name, position) in &by_position {
            if position == self.instructions.len() {
                writeln!(f, "  {name}:")?;
            }
        }

        write!(f, "}}")
    }
}
