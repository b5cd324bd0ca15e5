//! Text rendering of sampled instructions: the internal assembler syntax and the reference
//! assembler syntax the expected bytes come from.

use crate::encode::matcher::{RegFamily, Size, SlotKind};
use crate::testgen::constraint::Constraint;
use crate::testgen::sample::{Sampler, Value, saved_registers};
use crate::testgen::template::{Arrangement, Instance, Piece, Syntax, TestTemplate};

/// Which side of a test case is being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Form {
    Internal,
    Reference,
}

fn family_prefix(family: RegFamily) -> &'static str {
    match family {
        RegFamily::W | RegFamily::WSP => "w",
        RegFamily::X | RegFamily::XSP | RegFamily::WX | RegFamily::WXSP => "x",
        RegFamily::B => "b",
        RegFamily::H => "h",
        RegFamily::S => "s",
        RegFamily::D => "d",
        RegFamily::Q => "q",
        RegFamily::V => "v",
        RegFamily::F => "f",
    }
}

fn family_name(family: RegFamily) -> &'static str {
    match family {
        RegFamily::W => "W",
        RegFamily::X => "X",
        RegFamily::WX => "WX",
        RegFamily::WSP => "WSP",
        RegFamily::XSP => "XSP",
        RegFamily::WXSP => "WXSP",
        RegFamily::B => "B",
        RegFamily::H => "H",
        RegFamily::S => "S",
        RegFamily::D => "D",
        RegFamily::Q => "Q",
        RegFamily::V => "V",
        RegFamily::F => "F",
    }
}

fn aarch64_register(family: RegFamily, index: u8) -> String {
    match (family, index) {
        (RegFamily::W, 31) => "wzr".into(),
        (RegFamily::X, 31) => "xzr".into(),
        (RegFamily::WSP, 31) => "wsp".into(),
        (RegFamily::XSP, 31) => "sp".into(),
        _ => format!("{}{index}", family_prefix(family)),
    }
}

fn riscv_register(family: RegFamily, index: u8) -> String {
    let prefix = if family == RegFamily::F { "f" } else { "x" };
    format!("{prefix}{index}")
}

/// `{ra}`, `{ra, s0}`, `{ra, s0-s1}` ... `{ra, s0-s11}`.
pub fn saved_list(code: u8) -> String {
    match saved_registers(code) {
        0 => "{ra}".into(),
        1 => "{ra, s0}".into(),
        count => format!("{{ra, s0-s{}}}", count - 1),
    }
}

fn offset(value: i64) -> String {
    if value < 0 { format!(".-{}", -value) } else { format!(".+{value}") }
}

fn arrangement(size: Size, arrangement: Arrangement, full_width: bool, form: Form) -> String {
    let letter = size.letter();
    match (arrangement.lanes(size, full_width), form) {
        (Some(lanes), Form::Internal) => format!("{letter}{lanes}"),
        (Some(lanes), Form::Reference) => format!("{lanes}{}", letter.to_ascii_lowercase()),
        (None, Form::Internal) => letter.to_string(),
        (None, Form::Reference) => letter.to_ascii_lowercase().to_string(),
    }
}

fn vector_index(value: &Value) -> u8 {
    match value {
        Value::Register { index, .. } => *index,
        _ => 0,
    }
}

struct Renderer<'a> {
    template: &'a TestTemplate,
    instance: &'a Instance,
    form: Form,
    /// Slots written in dynamic notation, internal form only.
    dynamic: Vec<bool>,
    out: String,
}

impl Renderer<'_> {
    fn value(&mut self, slot: usize) {
        let Some(value) = self.instance.values.get(slot) else {
            return;
        };
        let text = match value {
            Value::Register { family, index } => {
                let dynamic = self.dynamic.get(slot).copied().unwrap_or(false);
                if dynamic {
                    format!("{}({index})", family_name(*family))
                } else {
                    match self.template.syntax {
                        Syntax::Aarch64 => aarch64_register(*family, *index),
                        Syntax::Riscv => riscv_register(*family, *index),
                    }
                }
            }
            Value::SavedList(code) => {
                if self.dynamic.get(slot).copied().unwrap_or(false) {
                    format!("{{ra; {}}}", saved_registers(*code))
                } else {
                    saved_list(*code)
                }
            }
            Value::Immediate(value) => {
                let is_offset = self
                    .template
                    .slots
                    .get(slot)
                    .is_some_and(|slot| slot.kind == SlotKind::Offset);
                if is_offset && self.form == Form::Reference {
                    offset(*value)
                } else {
                    value.to_string()
                }
            }
            Value::Pattern(bits) => bits.to_string(),
            Value::Float(value) => format!("{value:?}"),
            Value::Name(name) => match self.form {
                Form::Internal => name.clone(),
                Form::Reference => name.to_lowercase(),
            },
            Value::Modifier(modifier) => match self.form {
                Form::Internal => modifier.name().to_string(),
                Form::Reference => modifier.name().to_lowercase(),
            },
            Value::Omitted => String::new(),
        };
        self.out.push_str(&text);
    }

    fn vector(&mut self, slot: usize, size: Size, layout: Arrangement) {
        let index = self.instance.values.get(slot).map(vector_index).unwrap_or(0);
        let arrangement = arrangement(size, layout, self.instance.full_width, self.form);
        self.out.push_str(&format!("v{index}.{arrangement}"));
    }

    fn vector_list(&mut self, slot: usize, count: u8, size: Size, layout: Arrangement) {
        let first = self.instance.values.get(slot).map(vector_index).unwrap_or(0);
        let arrangement = arrangement(size, layout, self.instance.full_width, self.form);
        let text = match self.form {
            Form::Internal => format!("{{v{first}.{arrangement} * {count}}}"),
            Form::Reference => {
                let members: Vec<String> = (0..count)
                    .map(|offset| format!("v{}.{arrangement}", (first + offset) % 32))
                    .collect();
                format!("{{{}}}", members.join(", "))
            }
        };
        self.out.push_str(&text);
    }

    fn pieces(&mut self, pieces: &[Piece]) {
        for piece in pieces {
            match piece {
                Piece::Text(text) => self.out.push_str(text),
                Piece::Slot(slot) => self.value(*slot),
                Piece::Vector {
                    slot,
                    size,
                    arrangement,
                } => self.vector(*slot, *size, *arrangement),
                Piece::VectorList {
                    slot,
                    count,
                    size,
                    arrangement,
                } => self.vector_list(*slot, *count, *size, *arrangement),
                Piece::Optional(group) => {
                    if !self.instance.dropped_optionals {
                        self.pieces(group);
                    }
                }
            }
        }
    }
}

fn render(template: &TestTemplate, instance: &Instance, form: Form, dynamic: Vec<bool>) -> String {
    let mut renderer = Renderer {
        template,
        instance,
        form,
        dynamic,
        out: template.mnemonic.clone(),
    };
    renderer.pieces(&template.pieces);
    renderer.out
}

/// Chooses which slots use the dynamic register notation. Successor registers are always named
/// statically, and stack-pointer families only go dynamic for index 31.
fn dynamic_slots(template: &TestTemplate, instance: &Instance, sampler: &mut Sampler) -> Vec<bool> {
    template
        .slots
        .iter()
        .zip(&instance.values)
        .map(|(slot, value)| match value {
            Value::Register { family, index } => {
                if slot.constraint == Constraint::NextRegister {
                    return false;
                }
                let stack = matches!(family, RegFamily::WSP | RegFamily::XSP);
                let dynamic = sampler.coin();
                dynamic && (!stack || *index == 31)
            }
            Value::SavedList(_) => sampler.coin(),
            _ => false,
        })
        .collect()
}

/// The instruction in the internal assembler's syntax.
pub fn render_internal(template: &TestTemplate, instance: &Instance, sampler: &mut Sampler) -> String {
    let dynamic = dynamic_slots(template, instance, sampler);
    render(template, instance, Form::Internal, dynamic)
}

/// The instruction in the reference assembler's syntax.
pub fn render_reference(template: &TestTemplate, instance: &Instance) -> String {
    let text = render(template, instance, Form::Reference, Vec::new());
    match template.syntax {
        Syntax::Aarch64 => aarch64_fixups(text),
        Syntax::Riscv => riscv_fixups(text),
    }
}

fn aarch64_fixups(text: String) -> String {
    let text = text.to_lowercase();
    for alias in ["mov.inverted", "mov.logical"] {
        if let Some(rest) = text.strip_prefix(alias) {
            return format!("mov{rest}");
        }
    }
    text
}

/// `[base, offset]` becomes `offset(base)`.
fn riscv_memory_operands(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|close| open + close) else {
            break;
        };
        out.push_str(&rest[..open]);
        let inner = &rest[open + 1..close];
        match inner.split_once(',') {
            Some((base, offset)) => {
                out.push_str(&format!("{}({})", offset.trim(), base.trim()));
            }
            None => out.push_str(&format!("0({})", inner.trim())),
        }
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

fn riscv_fixups(text: String) -> String {
    let text = if text.contains('[') { riscv_memory_operands(&text) } else { text };
    let (mnemonic, operands) = match text.split_once(' ') {
        Some((mnemonic, operands)) => (mnemonic.to_string(), operands.to_string()),
        None => (text.clone(), String::new()),
    };
    if matches!(mnemonic.as_str(), "li.44" | "li.56" | "li.64") {
        return format!("li {operands}");
    }
    let lowered = mnemonic.to_lowercase();
    if matches!(lowered.as_str(), "c.mop.n" | "mop.r.n" | "mop.rr.n") {
        let stem = &mnemonic[..mnemonic.len() - 1];
        return match operands.rsplit_once(", ") {
            Some((head, last)) => format!("{stem}{} {head}", last.trim()),
            None => format!("{stem}{}", operands.trim()),
        };
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::matcher::Modifier;
    use crate::isa::variant::IsaFlags;
    use crate::testgen::template::tests::{aarch64_row, riscv_row};

    fn instance(values: Vec<Value>, full_width: bool, dropped_optionals: bool) -> Instance {
        Instance {
            values,
            full_width,
            dropped_optionals,
        }
    }

    fn reg(family: RegFamily, index: u8) -> Value {
        Value::Register { family, index }
    }

    #[test]
    fn zero_and_stack_registers() {
        assert_eq!(aarch64_register(RegFamily::W, 31), "wzr");
        assert_eq!(aarch64_register(RegFamily::XSP, 31), "sp");
        assert_eq!(aarch64_register(RegFamily::WSP, 31), "wsp");
        assert_eq!(aarch64_register(RegFamily::D, 31), "d31");
    }

    #[test]
    fn saved_lists_use_gas_ranges() {
        assert_eq!(saved_list(4), "{ra}");
        assert_eq!(saved_list(5), "{ra, s0}");
        assert_eq!(saved_list(14), "{ra, s0-s9}");
        assert_eq!(saved_list(15), "{ra, s0-s11}");
    }

    #[test]
    fn optional_shift_is_written_or_dropped() {
        let row = aarch64_row("MOVZ", 0x5280_0000, "W, Imm, End, LitMod(LSL)", "R(0), Ubits(5, 16), Ulist(21, &[0, 16])");
        let template = TestTemplate::from_row(&row);
        let kept = instance(vec![reg(RegFamily::W, 3), Value::Immediate(7), Value::Immediate(16)], true, false);
        assert_eq!(render_reference(&template, &kept), "movz w3, #7, lsl #16");
        let dropped = instance(vec![reg(RegFamily::W, 3), Value::Immediate(7), Value::Omitted], true, true);
        assert_eq!(render_reference(&template, &dropped), "movz w3, #7");
    }

    #[test]
    fn vectors_and_lists() {
        let row = aarch64_row("LD1", 0x0C40_7000, "RegList(2, WORD), RefBase", "R(0), R(5), Rwidth(30)");
        let template = TestTemplate::from_row(&row);
        let sample = instance(vec![reg(RegFamily::V, 31), reg(RegFamily::XSP, 31)], false, false);
        assert_eq!(render_reference(&template, &sample), "ld1 {v31.4h, v0.4h}, [sp]");
        let mut sampler = Sampler::seeded(0);
        let internal = render_internal(&template, &sample, &mut sampler);
        assert!(internal.starts_with("ld1 {v31.H4 * 2}, ["), "{internal}");

        let row = aarch64_row("ADD", 0x0E20_8400, "V(BYTE), V(BYTE), V(BYTE)", "R(0), R(5), R(16), Rwidth(30)");
        let template = TestTemplate::from_row(&row);
        let sample = instance(vec![reg(RegFamily::V, 1), reg(RegFamily::V, 2), reg(RegFamily::V, 3)], true, false);
        assert_eq!(render_reference(&template, &sample), "add v1.16b, v2.16b, v3.16b");
    }

    #[test]
    fn index_extend_is_lowercased_in_reference() {
        let row = aarch64_row("LDR", 0xF860_0800, "X, RefIndex", "R(0), R(5), R(16), ExtendsX(13), Ulist(12, &[0, 3])");
        let template = TestTemplate::from_row(&row);
        let sample = instance(
            vec![
                reg(RegFamily::X, 1),
                reg(RegFamily::XSP, 2),
                reg(RegFamily::W, 3),
                Value::Modifier(Modifier::Sxtw),
                Value::Immediate(3),
            ],
            true,
            false,
        );
        assert_eq!(render_reference(&template, &sample), "ldr x1, [x2, w3, sxtw #3]");
    }

    #[test]
    fn aliases_collapse_to_mov() {
        let row = aarch64_row("MOV", 0x1280_0000, r#"Dot, Lit("inverted"), W, Imm"#, "R(0), Special(5, INVERTED_WIDE_IMMEDIATE_W)");
        let template = TestTemplate::from_row(&row);
        let sample = instance(vec![reg(RegFamily::W, 0), Value::Pattern(0xFFFF_0000)], true, false);
        assert_eq!(render_reference(&template, &sample), "mov w0, #4294901760");
    }

    #[test]
    fn riscv_offsets_and_mops() {
        let row = riscv_row("beq", IsaFlags::RV32, &["i"], "X, X, Offset", "R(15), R(20), Offset(B)");
        let template = TestTemplate::from_row(&row);
        let sample = instance(vec![reg(RegFamily::X, 1), reg(RegFamily::X, 2), Value::Immediate(-8)], true, false);
        assert_eq!(render_reference(&template, &sample), "beq x1, x2, .-8");

        assert_eq!(riscv_fixups("mop.r.n x1, x2, 5".into()), "mop.r.5 x1, x2");
        assert_eq!(riscv_fixups("c.mop.n 3".into()), "c.mop.3");
        assert_eq!(riscv_fixups("li.56 x5, 9".into()), "li x5, 9");
        assert_eq!(riscv_fixups("lw x1, [x2, 8]".into()), "lw x1, 8(x2)");
    }
}
