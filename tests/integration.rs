//! Drives v20's public API the way an instruction engine would
use v20::*;

/// Pushes a word the way `PUSH` does: decrement `sp` by two, then store at `ss:sp`
fn push(cpu: &mut CPU, value: u16) -> Result<()> {
    let sp = cpu.reg16(Reg16::SP).wrapping_sub(2);
    cpu.set_reg16(Reg16::SP, sp);
    cpu.write_word(cpu.segment(Segment::SS), sp, value)
}

/// Pops a word the way `POP` does
fn pop(cpu: &mut CPU) -> Result<u16> {
    let sp = cpu.reg16(Reg16::SP);
    let value = cpu.read_word(cpu.segment(Segment::SS), sp)?;
    cpu.set_reg16(Reg16::SP, sp.wrapping_add(2));
    Ok(value)
}

/// `ADD r8, r8`, updating the arithmetic flags
fn add8(cpu: &mut CPU, dst: Reg8, src: Reg8) {
    let (a, b) = (cpu.reg8(dst), cpu.reg8(src));
    let (result, carry) = a.overflowing_add(b);
    cpu.set_reg8(dst, result);
    let flags = cpu.flags_mut();
    flags.assign(Flag::Carry, carry);
    flags.assign(Flag::Zero, result == 0);
    flags.assign(Flag::Sign, result & 0x80 != 0);
    flags.assign(Flag::AuxCarry, (a & 0xf) + (b & 0xf) > 0xf);
    flags.assign(Flag::Overflow, (a ^ result) & (b ^ result) & 0x80 != 0);
    flags.assign(Flag::Parity, FlagWord::parity_of(result as u16));
}

fn com_program() -> CPU {
    CPU::with_reset(
        Config::default(),
        ResetVector {
            cs: 0x1000,
            ds: 0x1000,
            ss: 0x1000,
            es: 0x1000,
            ip: 0x0100,
            sp: 0xfffe,
            flags: FlagWord::from_bits(0x0200),
        },
    )
}

#[test]
fn stack_roundtrip() -> Result<()> {
    let mut cpu = com_program();
    push(&mut cpu, 0x1234)?;
    push(&mut cpu, 0xabcd)?;
    assert_eq!(0xfffa, cpu.reg16(Reg16::SP));
    // 1000:fffa is physical 1fffa
    assert_eq!(Some(&[0xcd, 0xab, 0x34, 0x12][..]), cpu.mem().get(0x1fffa..0x1fffe));
    assert_eq!(0xabcd, pop(&mut cpu)?);
    assert_eq!(0x1234, pop(&mut cpu)?);
    assert_eq!(0xfffe, cpu.reg16(Reg16::SP));
    Ok(())
}

#[test]
fn stack_wraps_within_segment() -> Result<()> {
    let mut cpu = com_program();
    cpu.set_reg16(Reg16::SP, 0x0000);
    push(&mut cpu, 0x5555)?;
    assert_eq!(0xfffe, cpu.reg16(Reg16::SP));
    assert_eq!(0x5555, cpu.read_word(0x1000, 0xfffe)?);
    Ok(())
}

#[test]
fn add_sets_flags() {
    let mut cpu = com_program();
    cpu.set_reg8(Reg8::AL, 0x7f);
    cpu.set_reg8(Reg8::BL, 0x01);
    add8(&mut cpu, Reg8::AL, Reg8::BL);
    assert_eq!(0x80, cpu.reg8(Reg8::AL));
    assert_eq!("O-I-S-A--", cpu.flags().to_string());

    cpu.set_reg8(Reg8::AH, 0xff);
    cpu.set_reg8(Reg8::CH, 0x01);
    add8(&mut cpu, Reg8::AH, Reg8::CH);
    assert_eq!(0x0080, cpu.reg16(Reg16::AX));
    assert_eq!("--I--ZAPC", cpu.flags().to_string());
}

#[test]
fn fetch_through_cs_ip() -> Result<()> {
    let mut cpu = com_program();
    let start = cpu.translate(cpu.segment(Segment::CS), cpu.ip())?;
    assert_eq!(0x10100, start);
    // mov ax, 0x1234
    cpu.mem_mut().load(start, &[0xb8, 0x34, 0x12])?;
    let opcode = cpu.read_byte(cpu.segment(Segment::CS), cpu.ip())?;
    let reg = Reg16::from_index(opcode);
    let imm = cpu.read_word(cpu.segment(Segment::CS), cpu.ip() + 1)?;
    cpu.set_reg16(reg, imm);
    cpu.set_ip(cpu.ip() + 3);
    assert_eq!(0x1234, cpu.reg16(Reg16::AX));
    assert_eq!(0x0103, cpu.ip());
    Ok(())
}

#[test]
fn power_on_fetch_faults() {
    // ffff:0000 is where the BIOS ROM lives, outside conventional memory
    let cpu = CPU::new();
    assert_eq!(
        Err(Error::OutOfRange {
            segment: 0xffff,
            offset: 0x0000,
            physical: 0xffff0
        }),
        cpu.read_byte(cpu.segment(Segment::CS), cpu.ip())
    );
}

#[test]
fn instances_are_independent() -> Result<()> {
    let mut a = CPU::new();
    let b = CPU::new();
    a.write_byte(0, 0x10, 0xee)?;
    a.set_reg16(Reg16::BX, 1);
    assert_eq!(0, b.read_byte(0, 0x10)?);
    assert_eq!(0, b.reg16(Reg16::BX));
    Ok(())
}

#[test]
fn instances_run_on_separate_threads() {
    let handles: Vec<_> = (0..4u8)
        .map(|n| {
            std::thread::spawn(move || {
                let mut cpu = CPU::new();
                cpu.write_byte(0x0000, n as u16, n).map(|_| cpu)
            })
        })
        .collect();
    for (n, handle) in handles.into_iter().enumerate() {
        let cpu = handle.join().unwrap().unwrap();
        assert_eq!(Ok(n as u8), cpu.read_byte(0x0000, n as u16));
    }
}

#[test]
fn parse_names_from_text() -> Result<()> {
    let mut cpu = com_program();
    cpu.set_reg8("dh".parse()?, 0x42);
    cpu.set_segment("es".parse()?, 0xb800);
    assert_eq!(0x4200, cpu.reg16("DX".parse()?));
    assert_eq!(0xb800, cpu.segment(Segment::ES));
    assert!(matches!("cs".parse::<Reg8>(), Err(Error::InvalidWidth { .. })));
    Ok(())
}
