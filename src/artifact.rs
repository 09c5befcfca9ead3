use wasmparser::{Encoding, Parser as WasmParser, Payload};

/// What kind of binary a build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    CoreModule,
    Component,
    /// Not recognisable as WebAssembly.
    Unknown,
}

/// 检查构建产物的 wasm 头部
///
/// 只读取首个 payload，不做完整校验；无法识别时返回 `Unknown` 而不是报错。
pub fn inspect(bytes: &[u8]) -> ArtifactKind {
    let parser = WasmParser::new(0);
    match parser.parse_all(bytes).next() {
        Some(Ok(Payload::Version { encoding, .. })) => match encoding {
            Encoding::Module => ArtifactKind::CoreModule,
            Encoding::Component => ArtifactKind::Component,
        },
        _ => ArtifactKind::Unknown,
    }
}
