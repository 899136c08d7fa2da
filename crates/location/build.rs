// crates/location/build.rs

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = "src/infrastructure/grpc/proto";
    let proto_root = "../../proto";

    std::fs::create_dir_all(out_dir)?;

    // Client uniquement : le service Vehicle est implémenté ailleurs
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .out_dir(out_dir)
        .compile_protos(
            &[format!("{}/vehicle/v1/vehicle.proto", proto_root)],
            &[proto_root.to_string()],
        )?;

    println!("cargo:rerun-if-changed={}", proto_root);
    Ok(())
}
