//! Instruction field layouts and the decoded instruction model.
//!
//! Field positions use the 1-based numbering of [`crate::common::bits`]: bit 1 is the
//! least-significant bit of the word. Every instruction carries its opcode in bits 1-4;
//! the remaining 28 bits are laid out per shape below.

use crate::common::{Field, Reg};
use crate::isa::opcodes;

/// Opcode field (bits 1-4), shared by every instruction.
pub const OPCODE: Field = Field::new(1, 4);

/// `JMP` layout.
///
/// `offset[32:13] | cond_reg[12:10] | cond[9] | base[8:6] | imm[5] | opcode[4:1]`
pub mod jmp {
    use crate::common::Field;

    /// Set when the offset field is an immediate rather than a register index.
    pub const IMMEDIATE: Field = Field::new(5, 1);
    /// Register whose value is the jump base.
    pub const BASE: Field = Field::new(6, 3);
    /// Set when the jump depends on the condition register.
    pub const CONDITIONAL: Field = Field::new(9, 1);
    /// Register tested when the jump is conditional.
    pub const CONDITION: Field = Field::new(10, 3);
    /// Immediate offset, or the index of the offset register.
    pub const OFFSET: Field = Field::new(13, 20);
}

/// `LD` / `PUT` layout.
///
/// `offset[32:14] | base[13:11] | reg[10:8] | imm[7] | width[6:5] | opcode[4:1]`
pub mod mem {
    use crate::common::Field;

    /// Byte-width selector: 0 = 1 byte, 1 = 2 bytes, 2 = 4 bytes.
    pub const WIDTH: Field = Field::new(5, 2);
    /// Set when the offset field is an immediate rather than a register index.
    pub const IMMEDIATE: Field = Field::new(7, 1);
    /// Destination (LD) or source (PUT) register.
    pub const REG: Field = Field::new(8, 3);
    /// Base field.
    pub const BASE: Field = Field::new(11, 3);
    /// Immediate offset, or the index of the offset register.
    pub const OFFSET: Field = Field::new(14, 19);
}

/// `SET` layout.
///
/// `imm[32:9] | negative[8] | rd[7:5] | opcode[4:1]`
pub mod set {
    use crate::common::Field;

    /// Destination register.
    pub const DST: Field = Field::new(5, 3);
    /// Forces the top eight bits of the result to ones.
    pub const NEGATIVE: Field = Field::new(8, 1);
    /// 24-bit immediate.
    pub const IMM: Field = Field::new(9, 24);
    /// Bits forced high when [`NEGATIVE`] is set.
    pub const SIGN_FILL: u32 = 0xFF00_0000;
}

/// `SETU` layout.
///
/// `ignored[32:15] | imm[14:8] | rd[7:5] | opcode[4:1]`
pub mod setu {
    use crate::common::Field;

    /// Destination register.
    pub const DST: Field = Field::new(5, 3);
    /// 7-bit immediate.
    pub const IMM: Field = Field::new(8, 7);
    /// Register bits written by the immediate (bits 25-31).
    pub const TARGET: Field = Field::new(25, 7);
    /// Register bit that is always cleared (bit 32).
    pub const CLEARED: Field = Field::new(32, 1);
}

/// Layout shared by `ADD` through `XOR`.
///
/// `imm[32:15] | use_imm[14] | rs2[13:11] | rs1[10:8] | rd[7:5] | opcode[4:1]`
pub mod alu {
    use crate::common::Field;

    /// Destination register.
    pub const DST: Field = Field::new(5, 3);
    /// First source register.
    pub const SRC1: Field = Field::new(8, 3);
    /// Second source register, ignored when [`IMMEDIATE`] is set.
    pub const SRC2: Field = Field::new(11, 3);
    /// Set when the second operand is the immediate.
    pub const IMMEDIATE: Field = Field::new(14, 1);
    /// 18-bit immediate.
    pub const IMM: Field = Field::new(15, 18);
}

/// `BSR` / `BSL` layout.
///
/// `ignored[32:17] | rotate[16] | amount[15:11] | rs[10:8] | rd[7:5] | opcode[4:1]`
pub mod shift {
    use crate::common::Field;

    /// Destination register.
    pub const DST: Field = Field::new(5, 3);
    /// Source register.
    pub const SRC: Field = Field::new(8, 3);
    /// Shift amount (0-31).
    pub const AMOUNT: Field = Field::new(11, 5);
    /// Rotate instead of shifting in zeros.
    pub const ROTATE: Field = Field::new(16, 1);
}

/// Field accessors on raw instruction words.
pub trait InstructionBits {
    /// Extracts the opcode (bits 1-4).
    fn opcode(&self) -> u32;

    /// Extracts an arbitrary field.
    fn field(&self, field: Field) -> u32;

    /// Extracts a single-bit field as a flag.
    fn flag(&self, field: Field) -> bool;

    /// Extracts a 3-bit register field.
    fn reg(&self, field: Field) -> Reg;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        OPCODE.get(*self)
    }

    #[inline(always)]
    fn field(&self, field: Field) -> u32 {
        field.get(*self)
    }

    #[inline(always)]
    fn flag(&self, field: Field) -> bool {
        field.flag(*self)
    }

    #[inline(always)]
    fn reg(&self, field: Field) -> Reg {
        Reg::from_field(field.get(*self))
    }
}

/// Second operand of an instruction: a literal or a register's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Literal value taken from the instruction word.
    Imm(u32),
    /// Value held in a register.
    Reg(Reg),
}

/// Transfer size of a load or store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// One byte (selector 0).
    Byte,
    /// Two bytes (selector 1).
    Half,
    /// Four bytes (selector 2).
    Word,
}

impl Width {
    /// Maps a 2-bit selector to a width; selector 3 is reserved.
    pub const fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            0 => Some(Self::Byte),
            1 => Some(Self::Half),
            2 => Some(Self::Word),
            _ => None,
        }
    }

    /// The selector value that encodes this width.
    pub const fn selector(self) -> u32 {
        match self {
            Self::Byte => 0,
            Self::Half => 1,
            Self::Word => 2,
        }
    }

    /// Number of bytes transferred.
    pub const fn bytes(self) -> usize {
        match self {
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }
}

/// Operations of the three-register-plus-immediate family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Wrapping multiplication.
    Mul,
    /// Unsigned division.
    Div,
    /// Unsigned remainder.
    Mod,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
}

impl AluOp {
    /// Maps an opcode in 5-12 to its operation.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_ADD => Some(Self::Add),
            opcodes::OP_SUB => Some(Self::Sub),
            opcodes::OP_MUL => Some(Self::Mul),
            opcodes::OP_DIV => Some(Self::Div),
            opcodes::OP_MOD => Some(Self::Mod),
            opcodes::OP_AND => Some(Self::And),
            opcodes::OP_OR => Some(Self::Or),
            opcodes::OP_XOR => Some(Self::Xor),
            _ => None,
        }
    }

    /// The opcode that encodes this operation.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Add => opcodes::OP_ADD,
            Self::Sub => opcodes::OP_SUB,
            Self::Mul => opcodes::OP_MUL,
            Self::Div => opcodes::OP_DIV,
            Self::Mod => opcodes::OP_MOD,
            Self::And => opcodes::OP_AND,
            Self::Or => opcodes::OP_OR,
            Self::Xor => opcodes::OP_XOR,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::And => "and",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

/// Direction of a `BSR` / `BSL` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShiftDir {
    /// Towards the least-significant bit (`BSR`).
    Right,
    /// Towards the most-significant bit (`BSL`).
    Left,
}

impl ShiftDir {
    /// The opcode that encodes this direction.
    pub const fn opcode(self) -> u32 {
        match self {
            Self::Right => opcodes::OP_BSR,
            Self::Left => opcodes::OP_BSL,
        }
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Right => "bsr",
            Self::Left => "bsl",
        }
    }
}

/// A fully decoded instruction.
///
/// Produced by [`crate::isa::decode`]; every register index and width inside is
/// already validated, so applying an `Instruction` can only fault on runtime
/// conditions (zero divisors, out-of-bounds addresses).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Sets the PC to `base + offset`, unless `condition` names a register holding zero.
    Jmp {
        /// Register holding the jump base.
        base: Reg,
        /// Offset added to the base.
        offset: Operand,
        /// Register that must be non-zero for the jump to happen.
        condition: Option<Reg>,
    },
    /// Loads `width` bytes, big-endian and zero-extended, into `dst`.
    Ld {
        /// Transfer size.
        width: Width,
        /// Destination register.
        dst: Reg,
        /// Base field (a number or a register, see [`crate::config::BaseAddressing`]).
        base: Reg,
        /// Offset added to the base.
        offset: Operand,
    },
    /// Stores the low `width` bytes of `src`, big-endian.
    Put {
        /// Transfer size.
        width: Width,
        /// Source register.
        src: Reg,
        /// Base field (a number or a register, see [`crate::config::BaseAddressing`]).
        base: Reg,
        /// Offset added to the base.
        offset: Operand,
    },
    /// Replaces `dst` with a 24-bit immediate, with the top byte all ones if `negative`.
    Set {
        /// Destination register.
        dst: Reg,
        /// 24-bit immediate.
        imm: u32,
        /// Fill the top eight bits with ones.
        negative: bool,
    },
    /// Writes a 7-bit immediate into bits 25-31 of `dst` and clears bit 32.
    Setu {
        /// Destination register.
        dst: Reg,
        /// 7-bit immediate.
        imm: u32,
    },
    /// `dst = src1 <op> rhs`.
    Alu {
        /// Operation.
        op: AluOp,
        /// Destination register.
        dst: Reg,
        /// First source register.
        src1: Reg,
        /// Second operand.
        rhs: Operand,
    },
    /// `dst = src` shifted or rotated by `amount`.
    Shift {
        /// Direction.
        dir: ShiftDir,
        /// Destination register.
        dst: Reg,
        /// Source register.
        src: Reg,
        /// Shift amount (0-31).
        amount: u32,
        /// Rotate instead of shifting in zeros.
        rotate: bool,
    },
}

impl Instruction {
    /// The opcode this instruction encodes to.
    pub const fn opcode(&self) -> u32 {
        match self {
            Self::Jmp { .. } => opcodes::OP_JMP,
            Self::Ld { .. } => opcodes::OP_LD,
            Self::Put { .. } => opcodes::OP_PUT,
            Self::Set { .. } => opcodes::OP_SET,
            Self::Setu { .. } => opcodes::OP_SETU,
            Self::Alu { op, .. } => op.opcode(),
            Self::Shift { dir, .. } => dir.opcode(),
        }
    }
}
