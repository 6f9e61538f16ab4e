use std::io::Result;

fn main() -> Result<()> {
    // Use the vendored protoc binary so the build does not depend on a
    // system-installed protoc being present.
    if std::env::var_os("PROTOC").is_none() {
        if let Ok(protoc) = protoc_bin_vendored::protoc_bin_path() {
            unsafe { std::env::set_var("PROTOC", protoc) };
        }
    }

    // List of proto files containing a message definition
    let proto_files = &[
        // Services
        "proto/second_service.proto",
    ];

    // Name of the folder containing the proto definitions
    let proto_folder = "proto";

    tonic_prost_build::configure()
        .compile_protos(proto_files, &[proto_folder])
        .unwrap();

    Ok(())
}
