//! Cross-client hash conformance harness.
//!
//! Reads one JSON request from stdin and writes one JSON response to stdout.
//! Keys are 16-hex-char u64s, byte inputs are hex strings; digests come back
//! as fixed-width hex. Malformed requests answer `{ok: false, err: ...}`.

use quarry_hashes::{bip32_hash, murmur3_32, siphash_u256, siphash_u256_extra, SipHasher};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    data_hex: String,

    #[serde(default)]
    seed: u32,

    #[serde(default)]
    k0_hex: String,

    #[serde(default)]
    k1_hex: String,

    #[serde(default)]
    value_hex: String,

    #[serde(default)]
    extra: u32,

    #[serde(default)]
    chain_code_hex: String,

    #[serde(default)]
    child_index: u32,

    #[serde(default)]
    header: u8,

    #[serde(default)]
    key_hex: String,
}

#[derive(Serialize, Default)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    digest32: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    digest64: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    output_hex: Option<String>,
}

fn fail(err: String) -> Response {
    Response {
        ok: false,
        err: Some(err),
        ..Response::default()
    }
}

fn parse_u64_hex(field: &str, s: &str) -> Result<u64, String> {
    if s.len() != 16 {
        return Err(format!("{field}: expected 16 hex chars"));
    }
    u64::from_str_radix(s, 16).map_err(|_| format!("{field}: invalid hex"))
}

fn parse_bytes32(field: &str, s: &str) -> Result<[u8; 32], String> {
    let v = hex::decode(s).map_err(|_| format!("{field}: invalid hex"))?;
    let arr: [u8; 32] = v
        .try_into()
        .map_err(|_| format!("{field}: expected 32 bytes"))?;
    Ok(arr)
}

fn handle(req: &Request) -> Result<Response, String> {
    match req.op.as_str() {
        "murmur3" => {
            let data = hex::decode(&req.data_hex).map_err(|_| "data_hex: invalid hex".to_string())?;
            let h = murmur3_32(req.seed, &data);
            Ok(Response {
                ok: true,
                digest32: Some(format!("{h:08x}")),
                ..Response::default()
            })
        }
        "siphash" => {
            let k0 = parse_u64_hex("k0_hex", &req.k0_hex)?;
            let k1 = parse_u64_hex("k1_hex", &req.k1_hex)?;
            let data = hex::decode(&req.data_hex).map_err(|_| "data_hex: invalid hex".to_string())?;
            let mut hasher = SipHasher::new(k0, k1);
            hasher.write(&data);
            let h = hasher.finalize();
            Ok(Response {
                ok: true,
                digest64: Some(format!("{h:016x}")),
                ..Response::default()
            })
        }
        "siphash_u256" => {
            let k0 = parse_u64_hex("k0_hex", &req.k0_hex)?;
            let k1 = parse_u64_hex("k1_hex", &req.k1_hex)?;
            let val = parse_bytes32("value_hex", &req.value_hex)?;
            let h = siphash_u256(k0, k1, &val);
            Ok(Response {
                ok: true,
                digest64: Some(format!("{h:016x}")),
                ..Response::default()
            })
        }
        "siphash_u256_extra" => {
            let k0 = parse_u64_hex("k0_hex", &req.k0_hex)?;
            let k1 = parse_u64_hex("k1_hex", &req.k1_hex)?;
            let val = parse_bytes32("value_hex", &req.value_hex)?;
            let h = siphash_u256_extra(k0, k1, &val, req.extra);
            Ok(Response {
                ok: true,
                digest64: Some(format!("{h:016x}")),
                ..Response::default()
            })
        }
        "bip32_hash" => {
            let chain_code = parse_bytes32("chain_code_hex", &req.chain_code_hex)?;
            let key = parse_bytes32("key_hex", &req.key_hex)?;
            let out = bip32_hash(&chain_code, req.child_index, req.header, &key);
            Ok(Response {
                ok: true,
                output_hex: Some(hex::encode(out)),
                ..Response::default()
            })
        }
        other => Err(format!("unknown op: {other}")),
    }
}

fn main() {
    let req: Request = match serde_json::from_reader(std::io::stdin()) {
        Ok(v) => v,
        Err(e) => {
            let _ = serde_json::to_writer(std::io::stdout(), &fail(format!("bad request: {e}")));
            return;
        }
    };

    let resp = match handle(&req) {
        Ok(r) => r,
        Err(e) => fail(e),
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
