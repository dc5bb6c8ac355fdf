use codec::helpers::to_hex;
use codec::PacketBuilder;
use frame::CpuType;

use env_logger::Builder;
use log::{debug, info, LevelFilter};

use std::env;
use std::str::FromStr;

struct Settings {
    cpu: CpuType,
    position: u8,
    invoke_id: u16,
    payload: Vec<u8>,
}

fn parse_hex(txt: &str) -> Option<Vec<u8>> {
    let digits: String = txt.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return None;
    }
    (0..digits.len())
        .step_by(2)
        .map(|idx| u8::from_str_radix(digits.get(idx..idx + 2)?, 16).ok())
        .collect()
}

fn read_args() -> Result<Option<Settings>, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.first().map_or(false, |arg| arg == "--help" || arg == "-h") {
        println!(
            r#"xgt-packet [cpu] [position] [invoke_id] [payload]

Parameters:
    cpu       - target CPU family [xgk,xgi,xgr]. xgk by default
    position  - FEnet slot position. 0 by default
    invoke_id - request sequence number. 1 by default
    payload   - request body as hex string. empty by default

Env. variables:
    RUST_LOG - changes output verbosity. Values [error,warn,info,debug,trace]. info by default

Examples:
    xgt-packet - print an empty XGK client packet

    xgt-packet xgi 0 7 "54 00 02 00 00 00 01 00 07 00 25 4D 57 31 30 30" - read %MW100 from XGI

    RUST_LOG=trace xgt-packet xgr 1 - run app with extended output
    "#
        );
        return Ok(None);
    }

    let cpu = match args.get(0) {
        Some(arg) => CpuType::from_str(arg).map_err(|_| format!("unknown cpu type: {}", arg))?,
        None => CpuType::default(),
    };
    let position = match args.get(1) {
        Some(arg) => u8::from_str(arg).map_err(|e| format!("invalid position {}: {}", arg, e))?,
        None => 0,
    };
    let invoke_id = match args.get(2) {
        Some(arg) => u16::from_str(arg).map_err(|e| format!("invalid invoke id {}: {}", arg, e))?,
        None => frame::DEFAULT_INVOKE_ID,
    };
    let payload = match args.get(3) {
        Some(arg) => parse_hex(arg).ok_or_else(|| format!("invalid hex payload: {}", arg))?,
        None => Vec::new(),
    };

    Ok(Some(Settings {
        cpu,
        position,
        invoke_id,
        payload,
    }))
}

fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Some(settings) = read_args()? {
        init_logger();
        debug!(
            "cpu: {:?} position: {} invoke id: {}",
            settings.cpu, settings.position, settings.invoke_id
        );

        let packet = PacketBuilder::new(settings.cpu)
            .position(settings.position)
            .invoke_id(settings.invoke_id)
            .payload(&settings.payload)
            .build()?;

        info!("packet: {} bytes", packet.len());
        println!("{}", to_hex(&packet));
    }
    Ok(())
}
