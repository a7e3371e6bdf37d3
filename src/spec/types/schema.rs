use super::hw::Byte;
use num_derive::FromPrimitive;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/*
    The source language has seven independent mnemonic namespaces: opcode,
    register, instrument, parameter, action, prefix, and operator. Each is
    modelled as its own enum so that byte values which coincide across
    namespaces (0x0D is both OP_TAN and TSX_EQ, for instance) can never be
    compared or stored in a shared integer space.

    Mnemonic text maps to a variant through the derived `FromStr`
    (`strum(serialize = ..)` carries the exact source spelling), and the
    variant maps to its encoded byte through `code()`. The two maps are kept
    separate because several namespaces legitimately give distinct mnemonics
    the same byte: every instrument numbers its parameters from one, and the
    prefix byte is reused per opcode family. Those namespaces return their
    byte from a plain match instead of a discriminant.
*/

/// A name in one of the seven mnemonic namespaces.
pub trait Mnemonic: FromStr + Copy {
    /// What the namespace holds, as it should read in a diagnostic.
    const NAMESPACE: &'static str;

    /// The byte this mnemonic encodes to.
    fn code(self) -> Byte;
}

#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, FromPrimitive, EnumString, EnumIter,
)]
pub enum Opcode {
    #[strum(serialize = "OP_NOP")]
    Nop = 0x00,
    #[strum(serialize = "OP_MOV")]
    Mov = 0x01,
    #[strum(serialize = "OP_LEA")]
    Lea = 0x02,
    #[strum(serialize = "OP_CMP")]
    Cmp = 0x03,
    #[strum(serialize = "OP_SET")]
    Set = 0x04,
    #[strum(serialize = "OP_GET")]
    Get = 0x05,
    #[strum(serialize = "OP_ACT")]
    Act = 0x06,
    #[strum(serialize = "OP_HLT")]
    Hlt = 0x07,
    #[strum(serialize = "OP_STR")]
    Str = 0x08,
    #[strum(serialize = "OP_FMA")]
    Fma = 0x09,
    #[strum(serialize = "OP_FSD")]
    Fsd = 0x0A,
    #[strum(serialize = "OP_SIN")]
    Sin = 0x0B,
    #[strum(serialize = "OP_COS")]
    Cos = 0x0C,
    #[strum(serialize = "OP_TAN")]
    Tan = 0x0D,
    #[strum(serialize = "OP_POW")]
    Pow = 0x0E,
    #[strum(serialize = "OP_NOR")]
    Nor = 0x0F,
}

impl Mnemonic for Opcode {
    const NAMESPACE: &'static str = "opcode";

    fn code(self) -> Byte {
        self as Byte
    }
}

/// Bit 4 of a register code selects the float bank.
pub const REG_FLOAT_BANK: Byte = 0x10;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Register {
    #[strum(serialize = "IREG_A")]
    IregA = 0x00,
    #[strum(serialize = "IREG_B")]
    IregB = 0x01,
    #[strum(serialize = "IREG_C")]
    IregC = 0x02,
    #[strum(serialize = "IREG_D")]
    IregD = 0x03,
    #[strum(serialize = "IREG_E")]
    IregE = 0x04,
    #[strum(serialize = "IREG_F")]
    IregF = 0x05,
    #[strum(serialize = "IREG_G")]
    IregG = 0x06,
    #[strum(serialize = "IREG_H")]
    IregH = 0x07,
    #[strum(serialize = "IREG_I")]
    IregI = 0x08,
    #[strum(serialize = "IREG_J")]
    IregJ = 0x09,
    #[strum(serialize = "IREG_K")]
    IregK = 0x0A,
    #[strum(serialize = "IREG_L")]
    IregL = 0x0B,
    #[strum(serialize = "IREG_M")]
    IregM = 0x0C,
    #[strum(serialize = "IREG_N")]
    IregN = 0x0D,
    #[strum(serialize = "IREG_P")]
    IregP = 0x0E,
    #[strum(serialize = "IREG_U")]
    IregU = 0x0F,
    #[strum(serialize = "FREG_A")]
    FregA = 0x10,
    #[strum(serialize = "FREG_B")]
    FregB = 0x11,
    #[strum(serialize = "FREG_C")]
    FregC = 0x12,
    #[strum(serialize = "FREG_D")]
    FregD = 0x13,
    #[strum(serialize = "FREG_E")]
    FregE = 0x14,
    #[strum(serialize = "FREG_F")]
    FregF = 0x15,
    #[strum(serialize = "FREG_G")]
    FregG = 0x16,
    #[strum(serialize = "FREG_H")]
    FregH = 0x17,
    #[strum(serialize = "FREG_I")]
    FregI = 0x18,
    #[strum(serialize = "FREG_J")]
    FregJ = 0x19,
    #[strum(serialize = "FREG_K")]
    FregK = 0x1A,
    #[strum(serialize = "FREG_L")]
    FregL = 0x1B,
    #[strum(serialize = "FREG_M")]
    FregM = 0x1C,
    #[strum(serialize = "FREG_N")]
    FregN = 0x1D,
    #[strum(serialize = "FREG_P")]
    FregP = 0x1E,
    #[strum(serialize = "FREG_U")]
    FregU = 0x1F,
}

impl Register {
    pub fn is_float(self) -> bool {
        self.code() & REG_FLOAT_BANK != 0
    }
}

impl Mnemonic for Register {
    const NAMESPACE: &'static str = "register";

    fn code(self) -> Byte {
        self as Byte
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Instrument {
    #[strum(serialize = "INST_ADC")]
    Adc = 0x01,
    #[strum(serialize = "INST_GPS")]
    Gps = 0x02,
    #[strum(serialize = "INST_IMG")]
    Img = 0x03,
    #[strum(serialize = "INST_FPU")]
    Fpu = 0x04,
    #[strum(serialize = "INST_SDR")]
    Sdr = 0x05,
    #[strum(serialize = "INST_NMF")]
    Nmf = 0x06,
    #[strum(serialize = "INST_VXM")]
    Vxm = 0x07,
}

impl Mnemonic for Instrument {
    const NAMESPACE: &'static str = "instrument";

    fn code(self) -> Byte {
        self as Byte
    }
}

// Parameters are not instrument-scoped: the mnemonic string alone
// disambiguates, and each instrument numbers its own parameters from the
// bottom. The repeated bytes here are therefore intentional and must not be
// split into per-instrument tables.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Parameter {
    #[strum(serialize = "P_ADC_MODE")]
    AdcMode,
    #[strum(serialize = "P_ADC_MAGX")]
    AdcMagX,
    #[strum(serialize = "P_ADC_MAGY")]
    AdcMagY,
    #[strum(serialize = "P_ADC_MAGZ")]
    AdcMagZ,
    #[strum(serialize = "P_ADC_SUNX")]
    AdcSunX,
    #[strum(serialize = "P_ADC_SUNY")]
    AdcSunY,
    #[strum(serialize = "P_ADC_SUNZ")]
    AdcSunZ,
    #[strum(serialize = "P_ADC_ANGX")]
    AdcAngX,
    #[strum(serialize = "P_ADC_ANGY")]
    AdcAngY,
    #[strum(serialize = "P_ADC_ANGZ")]
    AdcAngZ,
    #[strum(serialize = "P_ADC_QTNA")]
    AdcQtnA,
    #[strum(serialize = "P_ADC_QTNB")]
    AdcQtnB,
    #[strum(serialize = "P_ADC_QTNC")]
    AdcQtnC,
    #[strum(serialize = "P_ADC_QTND")]
    AdcQtnD,
    #[strum(serialize = "P_ADC_MTQX")]
    AdcMtqX,
    #[strum(serialize = "P_ADC_MTQY")]
    AdcMtqY,
    #[strum(serialize = "P_ADC_MTQZ")]
    AdcMtqZ,
    #[strum(serialize = "P_IMG_GAIN_R")]
    ImgGainR,
    #[strum(serialize = "P_IMG_GAIN_G")]
    ImgGainG,
    #[strum(serialize = "P_IMG_GAIN_B")]
    ImgGainB,
    #[strum(serialize = "P_IMG_EXPOSE")]
    ImgExpose,
    #[strum(serialize = "P_IMG_STATUS")]
    ImgStatus,
    #[strum(serialize = "P_IMG_NUMBER")]
    ImgNumber,
    #[strum(serialize = "P_GPS_LATT")]
    GpsLatt,
    #[strum(serialize = "P_GPS_LONG")]
    GpsLong,
    #[strum(serialize = "P_GPS_ALTT")]
    GpsAltt,
    #[strum(serialize = "P_GPS_TIME")]
    GpsTime,
    #[strum(serialize = "P_NMF_TIME")]
    NmfTime,
    #[strum(serialize = "P_VXM_TIME")]
    VxmTime,
    #[strum(serialize = "P_VXM_PRSN")]
    VxmPrsn,
    #[strum(serialize = "P_VXM_TLSC")]
    VxmTlsc,
    #[strum(serialize = "P_VXM_DBUG")]
    VxmDbug,
    #[strum(serialize = "P_FPU_NIL")]
    FpuNil,
    #[strum(serialize = "P_FPU_ONE")]
    FpuOne,
    #[strum(serialize = "P_FPU_EXP")]
    FpuExp,
    #[strum(serialize = "P_FPU_PIE")]
    FpuPie,
}

impl Mnemonic for Parameter {
    const NAMESPACE: &'static str = "parameter";

    fn code(self) -> Byte {
        match self {
            Parameter::AdcMode => 0x01,
            Parameter::AdcMagX => 0x02,
            Parameter::AdcMagY => 0x03,
            Parameter::AdcMagZ => 0x04,
            Parameter::AdcSunX => 0x05,
            Parameter::AdcSunY => 0x06,
            Parameter::AdcSunZ => 0x07,
            Parameter::AdcAngX => 0x08,
            Parameter::AdcAngY => 0x09,
            Parameter::AdcAngZ => 0x0A,
            Parameter::AdcQtnA => 0x0B,
            Parameter::AdcQtnB => 0x0C,
            Parameter::AdcQtnC => 0x0D,
            Parameter::AdcQtnD => 0x0E,
            Parameter::AdcMtqX => 0x0F,
            Parameter::AdcMtqY => 0x10,
            Parameter::AdcMtqZ => 0x11,
            Parameter::ImgGainR => 0x01,
            Parameter::ImgGainG => 0x02,
            Parameter::ImgGainB => 0x03,
            Parameter::ImgExpose => 0x04,
            Parameter::ImgStatus => 0x05,
            Parameter::ImgNumber => 0x06,
            Parameter::GpsLatt => 0x01,
            Parameter::GpsLong => 0x02,
            Parameter::GpsAltt => 0x03,
            Parameter::GpsTime => 0x04,
            Parameter::NmfTime => 0x01,
            Parameter::VxmTime => 0x01,
            Parameter::VxmPrsn => 0x02,
            Parameter::VxmTlsc => 0x03,
            Parameter::VxmDbug => 0x04,
            Parameter::FpuNil => 0x00,
            Parameter::FpuOne => 0x01,
            Parameter::FpuExp => 0x02,
            Parameter::FpuPie => 0x03,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Action {
    #[strum(serialize = "A_IMG_DO_JPG")]
    ImgDoJpg,
    #[strum(serialize = "A_IMG_DO_RAW")]
    ImgDoRaw,
    #[strum(serialize = "A_IMG_DO_BMP")]
    ImgDoBmp,
    #[strum(serialize = "A_IMG_DO_PNG")]
    ImgDoPng,
    #[strum(serialize = "A_ADC_NADIR")]
    AdcNadir,
    #[strum(serialize = "A_ADC_TOSUN")]
    AdcToSun,
    #[strum(serialize = "A_ADC_BDOTT")]
    AdcBdott,
    #[strum(serialize = "A_ADC_TRACK")]
    AdcTrack,
    #[strum(serialize = "A_ADC_UNSET")]
    AdcUnset,
}

impl Mnemonic for Action {
    const NAMESPACE: &'static str = "action";

    fn code(self) -> Byte {
        match self {
            Action::ImgDoJpg => 0x07,
            Action::ImgDoRaw => 0x08,
            Action::ImgDoBmp => 0x09,
            Action::ImgDoPng => 0x0A,
            Action::AdcNadir => 0x05,
            Action::AdcToSun => 0x06,
            Action::AdcBdott => 0x07,
            Action::AdcTrack => 0x08,
            Action::AdcUnset => 0x09,
        }
    }
}

// One namespace, three per-opcode families: MOV addressing modes, STR
// output channels, and the forward/inverse selector for the trig and power
// opcodes. Which family a grammar accepts is decided at dispatch, not here.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Prefix {
    #[strum(serialize = "PRE_MOV_REG")]
    MovReg,
    #[strum(serialize = "PRE_MOV_RAM")]
    MovRam,
    #[strum(serialize = "PRE_MOV_IND")]
    MovInd,
    #[strum(serialize = "PRE_STR_ALU")]
    StrAlu,
    #[strum(serialize = "PRE_STR_FPU")]
    StrFpu,
    #[strum(serialize = "PRE_STR_BIN")]
    StrBin,
    #[strum(serialize = "PRE_NORMAL")]
    Normal,
    #[strum(serialize = "PRE_INVERT")]
    Invert,
}

impl Mnemonic for Prefix {
    const NAMESPACE: &'static str = "prefix";

    fn code(self) -> Byte {
        match self {
            Prefix::MovReg => 0x01,
            Prefix::MovRam => 0x02,
            Prefix::MovInd => 0x03,
            Prefix::StrAlu => 0x01,
            Prefix::StrFpu => 0x02,
            Prefix::StrBin => 0x03,
            Prefix::Normal => 0x01,
            Prefix::Invert => 0x02,
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, EnumString, EnumIter)]
pub enum Operator {
    #[strum(serialize = "ALU_EQ")]
    AluEq = 0x01,
    #[strum(serialize = "ALU_NE")]
    AluNe = 0x02,
    #[strum(serialize = "ALU_GT")]
    AluGt = 0x03,
    #[strum(serialize = "ALU_LT")]
    AluLt = 0x04,
    #[strum(serialize = "ALU_GE")]
    AluGe = 0x05,
    #[strum(serialize = "ALU_LE")]
    AluLe = 0x06,
    #[strum(serialize = "FPU_EQ")]
    FpuEq = 0x07,
    #[strum(serialize = "FPU_NE")]
    FpuNe = 0x08,
    #[strum(serialize = "FPU_GT")]
    FpuGt = 0x09,
    #[strum(serialize = "FPU_LT")]
    FpuLt = 0x0A,
    #[strum(serialize = "TSX_EQ")]
    TsxEq = 0x0D,
    #[strum(serialize = "TSX_NE")]
    TsxNe = 0x0E,
}

impl Operator {
    /// Task-status operators change the CMP grammar: the middle operand is a
    /// task address instead of a register.
    pub fn is_task_status(self) -> bool {
        matches!(self, Operator::TsxEq | Operator::TsxNe)
    }
}

impl Mnemonic for Operator {
    const NAMESPACE: &'static str = "operator";

    fn code(self) -> Byte {
        self as Byte
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    fn assert_roundtrip<T>()
    where
        T: Mnemonic + IntoEnumIterator + ToString + PartialEq + std::fmt::Debug,
    {
        let mut seen = HashSet::new();
        for variant in T::iter() {
            let mnemonic = variant.to_string();
            assert!(seen.insert(mnemonic.clone()), "duplicate mnemonic {}", mnemonic);
            match T::from_str(&mnemonic) {
                Ok(resolved) => assert_eq!(resolved, variant),
                Err(_) => panic!("mnemonic {} does not resolve", mnemonic),
            }
        }
    }

    #[test]
    fn mnemonics_unique_and_resolvable_per_namespace() {
        assert_roundtrip::<Opcode>();
        assert_roundtrip::<Register>();
        assert_roundtrip::<Instrument>();
        assert_roundtrip::<Parameter>();
        assert_roundtrip::<Action>();
        assert_roundtrip::<Prefix>();
        assert_roundtrip::<Operator>();
    }

    #[test]
    fn unknown_mnemonics_do_not_resolve() {
        assert!(Opcode::from_str("OP_JMP").is_err());
        assert!(Register::from_str("5").is_err());
        assert!(Parameter::from_str("P_ADC_MODE ").is_err());
    }

    #[test]
    fn register_banks_split_on_high_bit() {
        assert_eq!(Register::IregA.code(), 0x00);
        assert_eq!(Register::IregU.code(), 0x0F);
        assert_eq!(Register::FregA.code(), 0x10);
        assert_eq!(Register::FregU.code(), 0x1F);
        assert!(!Register::IregU.is_float());
        assert!(Register::FregA.is_float());
    }

    #[test]
    fn parameter_bytes_repeat_across_instruments() {
        // Every instrument numbers from the bottom; this overlap is part of
        // the encoding and must survive.
        assert_eq!(Parameter::AdcMode.code(), Parameter::ImgGainR.code());
        assert_eq!(Parameter::GpsLatt.code(), Parameter::NmfTime.code());
        assert_eq!(Parameter::FpuNil.code(), 0x00);
    }

    #[test]
    fn prefix_bytes_repeat_across_families() {
        assert_eq!(Prefix::MovReg.code(), Prefix::StrAlu.code());
        assert_eq!(Prefix::MovReg.code(), Prefix::Normal.code());
        assert_eq!(Prefix::MovInd.code(), Prefix::StrBin.code());
    }

    #[test]
    fn colliding_bytes_stay_in_their_namespaces() {
        // 0x0D is an opcode, a task-status operator, and a parameter; 0x0E
        // likewise. The types keep them apart, the bytes agree.
        assert_eq!(Opcode::Tan.code(), Operator::TsxEq.code());
        assert_eq!(Opcode::Pow.code(), Operator::TsxNe.code());
    }
}
