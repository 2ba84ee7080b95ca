//! Code 128 symbol table and the variants built on top of it.

use core::{fmt, str::FromStr};

use crate::pattern::Pattern;
use crate::Error;

/// Number of symbols in a Code 128 alphabet, Stop included.
pub const SYMBOL_COUNT: usize = 107;
/// Modulus of the weighted checksum.
pub const CHECKSUM_MODULUS: u32 = 103;
/// Position of the Stop symbol, shared by every variant.
pub const STOP: u8 = 106;

/// A symbol that is not a data character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Special {
    Fnc1,
    Fnc2,
    Fnc3,
    Fnc4,
    Shift,
    CodeA,
    CodeB,
    CodeC,
    StartA,
    StartB,
    StartC,
    Stop,
}

impl Special {
    pub const fn name(self) -> &'static str {
        match self {
            Special::Fnc1 => "FNC 1",
            Special::Fnc2 => "FNC 2",
            Special::Fnc3 => "FNC 3",
            Special::Fnc4 => "FNC 4",
            Special::Shift => "SHIFT",
            Special::CodeA => "CODE A",
            Special::CodeB => "CODE B",
            Special::CodeC => "CODE C",
            Special::StartA => "Start A",
            Special::StartB => "Start B",
            Special::StartC => "Start C",
            Special::Stop => "Stop",
        }
    }
}

/// Key of an alphabet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A data character, as its ASCII code.
    Char(u8),
    Special(Special),
}

const CONTROL_NAMES: [&str; 32] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US",
];

impl Symbol {
    const fn same(self, other: Symbol) -> bool {
        match (self, other) {
            (Symbol::Char(a), Symbol::Char(b)) => a == b,
            (Symbol::Special(a), Symbol::Special(b)) => a as u8 == b as u8,
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    /// Writes the character itself, or its mnemonic (`NUL`, `DEL`, `FNC 1`...)
    /// when it has no printable form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Char(c @ 0x00..=0x1F) => f.write_str(CONTROL_NAMES[c as usize]),
            Symbol::Char(0x7F) => f.write_str("DEL"),
            Symbol::Char(c) => fmt::Write::write_char(f, char::from(c)),
            Symbol::Special(s) => f.write_str(s.name()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    a: Symbol,
    b: Symbol,
    pattern: Pattern,
}

const fn e(a: Symbol, b: Symbol, digits: u32) -> Entry {
    Entry { a, b, pattern: Pattern::from_digits(digits) }
}

use Special::*;
use Symbol::{Char as C, Special as S};

// Must not be reordered: an entry's position is its symbol value and the
// checksum weight of the character it encodes. Columns are (set A, set B).
const TABLE: [Entry; SYMBOL_COUNT] = [
    e(C(b' '),   C(b' '),   212222), // 0
    e(C(b'!'),   C(b'!'),   222122),
    e(C(b'"'),   C(b'"'),   222221),
    e(C(b'#'),   C(b'#'),   121223),
    e(C(b'$'),   C(b'$'),   121322),
    e(C(b'%'),   C(b'%'),   131222),
    e(C(b'&'),   C(b'&'),   122213),
    e(C(b'\''),  C(b'\''),  122312),
    e(C(b'('),   C(b'('),   132212), // 8
    e(C(b')'),   C(b')'),   221213),
    e(C(b'*'),   C(b'*'),   221312),
    e(C(b'+'),   C(b'+'),   231212),
    e(C(b','),   C(b','),   112232),
    e(C(b'-'),   C(b'-'),   122132),
    e(C(b'.'),   C(b'.'),   122231),
    e(C(b'/'),   C(b'/'),   113222),
    e(C(b'0'),   C(b'0'),   123122), // 16
    e(C(b'1'),   C(b'1'),   123221),
    e(C(b'2'),   C(b'2'),   223211),
    e(C(b'3'),   C(b'3'),   221132),
    e(C(b'4'),   C(b'4'),   221231),
    e(C(b'5'),   C(b'5'),   213212),
    e(C(b'6'),   C(b'6'),   223112),
    e(C(b'7'),   C(b'7'),   312131),
    e(C(b'8'),   C(b'8'),   311222), // 24
    e(C(b'9'),   C(b'9'),   321122),
    e(C(b':'),   C(b':'),   321221),
    e(C(b';'),   C(b';'),   312212),
    e(C(b'<'),   C(b'<'),   322112),
    e(C(b'='),   C(b'='),   322211),
    e(C(b'>'),   C(b'>'),   212123),
    e(C(b'?'),   C(b'?'),   212321),
    e(C(b'@'),   C(b'@'),   232121), // 32
    e(C(b'A'),   C(b'A'),   111323),
    e(C(b'B'),   C(b'B'),   131123),
    e(C(b'C'),   C(b'C'),   131321),
    e(C(b'D'),   C(b'D'),   112313),
    e(C(b'E'),   C(b'E'),   132113),
    e(C(b'F'),   C(b'F'),   132311),
    e(C(b'G'),   C(b'G'),   211313),
    e(C(b'H'),   C(b'H'),   231113), // 40
    e(C(b'I'),   C(b'I'),   231311),
    e(C(b'J'),   C(b'J'),   112133),
    e(C(b'K'),   C(b'K'),   112331),
    e(C(b'L'),   C(b'L'),   132131),
    e(C(b'M'),   C(b'M'),   113123),
    e(C(b'N'),   C(b'N'),   113321),
    e(C(b'O'),   C(b'O'),   133121),
    e(C(b'P'),   C(b'P'),   313121), // 48
    e(C(b'Q'),   C(b'Q'),   211331),
    e(C(b'R'),   C(b'R'),   231131),
    e(C(b'S'),   C(b'S'),   213113),
    e(C(b'T'),   C(b'T'),   213311),
    e(C(b'U'),   C(b'U'),   213131),
    e(C(b'V'),   C(b'V'),   311123),
    e(C(b'W'),   C(b'W'),   311321),
    e(C(b'X'),   C(b'X'),   331121), // 56
    e(C(b'Y'),   C(b'Y'),   312113),
    e(C(b'Z'),   C(b'Z'),   312311),
    e(C(b'['),   C(b'['),   332111),
    e(C(b'\\'),  C(b'\\'),  314111),
    e(C(b']'),   C(b']'),   221411),
    e(C(b'^'),   C(b'^'),   431111),
    e(C(b'_'),   C(b'_'),   111224),
    e(C(0x00),   C(b'`'),   111422), // 64 NUL
    e(C(0x01),   C(b'a'),   121124), // 65 SOH
    e(C(0x02),   C(b'b'),   121421), // 66 STX
    e(C(0x03),   C(b'c'),   141122), // 67 ETX
    e(C(0x04),   C(b'd'),   141221), // 68 EOT
    e(C(0x05),   C(b'e'),   112214), // 69 ENQ
    e(C(0x06),   C(b'f'),   112412), // 70 ACK
    e(C(0x07),   C(b'g'),   122114), // 71 BEL
    e(C(0x08),   C(b'h'),   122411), // 72 BS
    e(C(0x09),   C(b'i'),   142112), // 73 HT
    e(C(0x0A),   C(b'j'),   142211), // 74 LF
    e(C(0x0B),   C(b'k'),   241211), // 75 VT
    e(C(0x0C),   C(b'l'),   221114), // 76 FF
    e(C(0x0D),   C(b'm'),   413111), // 77 CR
    e(C(0x0E),   C(b'n'),   241112), // 78 SO
    e(C(0x0F),   C(b'o'),   134111), // 79 SI
    e(C(0x10),   C(b'p'),   111242), // 80 DLE
    e(C(0x11),   C(b'q'),   121142), // 81 DC1
    e(C(0x12),   C(b'r'),   121241), // 82 DC2
    e(C(0x13),   C(b's'),   114212), // 83 DC3
    e(C(0x14),   C(b't'),   124112), // 84 DC4
    e(C(0x15),   C(b'u'),   124211), // 85 NAK
    e(C(0x16),   C(b'v'),   411212), // 86 SYN
    e(C(0x17),   C(b'w'),   421112), // 87 ETB
    e(C(0x18),   C(b'x'),   421211), // 88 CAN
    e(C(0x19),   C(b'y'),   212141), // 89 EM
    e(C(0x1A),   C(b'z'),   214121), // 90 SUB
    e(C(0x1B),   C(b'{'),   412121), // 91 ESC
    e(C(0x1C),   C(b'|'),   111143), // 92 FS
    e(C(0x1D),   C(b'}'),   111341), // 93 GS
    e(C(0x1E),   C(b'~'),   131141), // 94 RS
    e(C(0x1F),   C(0x7F),   114113), // 95 US / DEL
    e(S(Fnc3),   S(Fnc3),   114311), // 96
    e(S(Fnc2),   S(Fnc2),   411113),
    e(S(Shift),  S(Shift),  411311),
    e(S(CodeC),  S(CodeC),  113141),
    e(S(CodeB),  S(Fnc4),   114131),
    e(S(Fnc4),   S(CodeA),  311141),
    e(S(Fnc1),   S(Fnc1),   411131),
    e(S(StartA), S(StartA), 211412),
    e(S(StartB), S(StartB), 211214), // 104
    e(S(StartC), S(StartC), 211232),
    e(S(Stop),   S(Stop),   2331112),
];

static ALPHABET: [Entry; SYMBOL_COUNT] = TABLE;

const NONE: u8 = u8::MAX;

/// Derives the ASCII to symbol value lookup of a variant from [TABLE].
const fn ascii_lookup(variant: Variant) -> [u8; 128] {
    let mut lookup = [NONE; 128];
    let mut i = 0;
    while i < SYMBOL_COUNT {
        if let Symbol::Char(c) = TABLE[i].key(variant) {
            assert!(lookup[c as usize] == NONE, "duplicate character in alphabet");
            lookup[c as usize] = i as u8;
        }
        i += 1;
    }
    lookup
}

const fn position_of(variant: Variant, symbol: Symbol) -> u8 {
    let mut i = 0;
    while i < SYMBOL_COUNT {
        if TABLE[i].key(variant).same(symbol) {
            return i as u8;
        }
        i += 1;
    }
    panic!("symbol missing from alphabet")
}

const LOOKUP_A: [u8; 128] = ascii_lookup(Variant::UppercaseOnly);
const LOOKUP_B: [u8; 128] = ascii_lookup(Variant::General);

const FUNCTIONS_A: [u8; 4] = [
    position_of(Variant::UppercaseOnly, S(Fnc1)),
    position_of(Variant::UppercaseOnly, S(Fnc2)),
    position_of(Variant::UppercaseOnly, S(Fnc3)),
    position_of(Variant::UppercaseOnly, S(Fnc4)),
];
const FUNCTIONS_B: [u8; 4] = [
    position_of(Variant::General, S(Fnc1)),
    position_of(Variant::General, S(Fnc2)),
    position_of(Variant::General, S(Fnc3)),
    position_of(Variant::General, S(Fnc4)),
];

const _: () = assert!(position_of(Variant::General, S(Stop)) == STOP);
const _: () = assert!(position_of(Variant::UppercaseOnly, S(Stop)) == STOP);

impl Entry {
    const fn key(&self, variant: Variant) -> Symbol {
        match variant {
            Variant::UppercaseOnly => self.a,
            Variant::General => self.b,
        }
    }
}

/// Function characters that can be placed among the data symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Function {
    Fnc1 = 0,
    Fnc2 = 1,
    Fnc3 = 2,
    Fnc4 = 3,
}

/// Supported Code 128 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
pub enum Variant {
    /// Code 128 set B: printable ASCII including lower-case letters.
    #[default]
    General,
    /// Code 128 set A: upper-case ASCII and control characters. Lower-case
    /// input is folded to upper case.
    UppercaseOnly,
}

impl Variant {
    /// The symbology name used to select this variant.
    pub const fn name(self) -> &'static str {
        match self {
            Variant::General => "code128",
            Variant::UppercaseOnly => "code128a",
        }
    }

    /// Symbol value of the start symbol. It also seeds the checksum, the start
    /// symbol being weighted by 1.
    pub const fn start(self) -> u8 {
        match self {
            Variant::General => 104,
            Variant::UppercaseOnly => 103,
        }
    }

    pub const fn seed(self) -> u32 {
        self.start() as u32
    }

    pub const fn start_pattern(self) -> Pattern {
        TABLE[self.start() as usize].pattern
    }

    /// Applies the case folding of this variant.
    pub const fn fold(self, c: char) -> char {
        match self {
            Variant::General => c,
            Variant::UppercaseOnly => c.to_ascii_uppercase(),
        }
    }

    /// Zero-based position of `c` in this variant's alphabet. No case folding
    /// is applied.
    pub const fn index_of(self, c: char) -> Option<u8> {
        if !c.is_ascii() {
            return None;
        }
        let lookup = match self {
            Variant::General => &LOOKUP_B,
            Variant::UppercaseOnly => &LOOKUP_A,
        };
        match lookup[c as usize] {
            NONE => None,
            v => Some(v),
        }
    }

    /// Pattern of `c` in this variant's alphabet. A miss is reported at
    /// position 1, as for a text made of `c` alone.
    pub fn pattern_for(self, c: char) -> Result<Pattern, Error> {
        self.index_of(c)
            .map(|i| ALPHABET[i as usize].pattern)
            .ok_or(Error::UnsupportedCharacter { character: c, position: 1, variant: self })
    }

    /// Symbol value of a function character in this variant.
    pub const fn function(self, f: Function) -> u8 {
        match self {
            Variant::General => FUNCTIONS_B[f as usize],
            Variant::UppercaseOnly => FUNCTIONS_A[f as usize],
        }
    }

    /// Symbol at position `index` of this variant's alphabet.
    pub fn symbol_at(self, index: u8) -> Option<Symbol> {
        ALPHABET.get(index as usize).map(|e| e.key(self))
    }

    /// Iterates over the alphabet in symbol value order.
    pub fn alphabet(self) -> impl Iterator<Item = (Symbol, Pattern)> + Clone {
        ALPHABET.iter().map(move |e| (e.key(self), e.pattern))
    }
}

/// Pattern of the symbol value `index`. This is a positional lookup, both
/// variants share the same pattern at each position.
pub const fn pattern_at(index: u8) -> Option<Pattern> {
    if (index as usize) < SYMBOL_COUNT {
        Some(TABLE[index as usize].pattern)
    } else {
        None
    }
}

pub const fn stop_pattern() -> Pattern {
    TABLE[STOP as usize].pattern
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("code128") {
            Ok(Variant::General)
        } else if s.eq_ignore_ascii_case("code128a") {
            Ok(Variant::UppercaseOnly)
        } else {
            log::debug!("rejecting barcode type {s:?}");
            Err(Error::UnsupportedVariant(s.to_owned()))
        }
    }
}

impl TryFrom<String> for Variant {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Variant> for &'static str {
    fn from(v: Variant) -> Self {
        v.name()
    }
}
