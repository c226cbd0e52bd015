//! Property tests for the integer renderers and buffer truncation
//!
//! Reference output comes from `core::fmt`, rebuilt where the engine's
//! layout rules differ from Rust's.

use proptest::prelude::*;
use tinyprint_core::{format_heapless, format_into, Arg};

fn render(format: &str, args: &[Arg<'_>]) -> String {
    let out = format_heapless::<96>(format, args).unwrap();
    String::from_utf8(out.to_vec()).unwrap()
}

fn fill(byte: char, count: usize) -> String {
    core::iter::repeat(byte).take(count).collect()
}

proptest! {
    #[test]
    fn decimal_reparses(value in any::<i32>()) {
        let out = render("%d", &[Arg::Int(value)]);
        prop_assert_eq!(out.parse::<i32>().unwrap(), value);
        prop_assert_eq!(out, value.to_string());
    }

    #[test]
    fn unsigned_matches_display(value in any::<u32>()) {
        prop_assert_eq!(render("%u", &[Arg::Uint(value)]), value.to_string());
    }

    #[test]
    fn decimal_zero_pad_fills_table(value in any::<i32>(), width in 0usize..16, plus in any::<bool>()) {
        let format = if plus { format!("%+0{}d", width) } else { format!("%0{}d", width) };
        let sign = if value < 0 { "-" } else if plus { "+" } else { "" };
        prop_assert_eq!(
            render(&format, &[Arg::Int(value)]),
            format!("{}{:010}", sign, value.unsigned_abs())
        );
    }

    #[test]
    fn decimal_space_pad_after_sign(value in any::<i32>(), width in 1usize..16) {
        let digits = value.unsigned_abs().to_string();
        let sign = if value < 0 { "-" } else { "" };
        let spaces = width.saturating_sub(sign.len() + digits.len());
        prop_assert_eq!(
            render(&format!("%{}d", width), &[Arg::Int(value)]),
            format!("{}{}{}", sign, fill(' ', spaces), digits)
        );
    }

    #[test]
    fn hex_matches_reference(value in any::<u32>(), width in 0usize..12) {
        prop_assert_eq!(render(&format!("%0{}x", width), &[Arg::Uint(value)]), format!("{:01$x}", value, width));
        prop_assert_eq!(render(&format!("%{}X", width), &[Arg::Uint(value)]), format!("{:>1$X}", value, width));
    }

    #[test]
    fn hex_prefix_precedes_padding(value in any::<u32>(), width in 0usize..12) {
        let digits = format!("{:x}", value);
        let zeros = width.saturating_sub(digits.len());
        prop_assert_eq!(
            render(&format!("%#0{}x", width), &[Arg::Uint(value)]),
            format!("0X{}{}", fill('0', zeros), digits)
        );
    }

    #[test]
    fn octal_matches_reference(value in any::<u32>(), width in 0usize..14) {
        prop_assert_eq!(render(&format!("%0{}o", width), &[Arg::Uint(value)]), format!("{:01$o}", value, width));
        let digits = format!("{:o}", value);
        let spaces = width.saturating_sub(digits.len());
        prop_assert_eq!(
            render(&format!("%#{}o", width), &[Arg::Uint(value)]),
            format!("0{}{}", fill(' ', spaces), digits)
        );
    }

    #[test]
    fn buffer_keeps_prefix_and_terminates(text in "[ -~]{0,40}", cap in 1usize..48) {
        // `%` would start directives; keep the text literal
        let text = text.replace('%', "");
        let mut buf = vec![0xAAu8; cap];
        let written = format_into(&mut buf, &text, &[]).unwrap();
        let expected = text.len().min(cap - 1);
        prop_assert_eq!(written, expected);
        prop_assert_eq!(&buf[..written], &text.as_bytes()[..expected]);
        prop_assert_eq!(buf[written], 0);
    }

    #[test]
    fn unrecognized_specifier_echoes(byte in prop::sample::select(b"abghijkmnqrtvwyzABCDFGHZ!?".to_vec())) {
        let format = format!("<%{}>", byte as char);
        prop_assert_eq!(render(&format, &[]), format!("<{}>", byte as char));
    }
}
