use cv_qcircuit::{ Circuit, GateEvent };

// a small Gaussian boson sampling-like circuit
//
//   q0 ---S--BS-------------
//            |
//   q1 ---S--BS--BS---*-----
//                |    |
//   q2 ---S------BS---K--F--
//
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let events: Vec<GateEvent> =
        [
            "Sgate(0.5) | (q[0])",
            "Sgate(0.5) | (q[1])",
            "Sgate(0.5) | (q[2])",
            "BSgate(0.7854, 0) | (q[0], q[1])",
            "BSgate(0.7854, 0) | (q[1], q[2])",
            "CKgate(0.1) | (q[1], q[2])",
            "Fouriergate | (q[2])",
        ]
        .iter()
        .map(|s| s.parse::<GateEvent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut circuit = Circuit::new(3);
    circuit.set_column_spacing(1.0).set_row_spacing(0.7);
    circuit.extend_events(&events)?;
    println!("{}", circuit);

    let dir = std::env::args().nth(1)
        .unwrap_or_else(|| cv_qcircuit::circuit::DEFAULT_TEX_DIR.to_string());
    let path = circuit.save_document(dir)?;
    println!("saved to {}", path.display());
    Ok(())
}
