//! Binary that takes as standard in a graph in .gr format and as first argument a budget `k`,
//! decides if the graph has a vertex cover of size at most `k` and writes the answer (and a
//! cover) to standard out.
//!
//! Usage: `decide <k> [--trivial-crowns] < graph.gr`

use std::env;
use std::error;
use std::io::{self, Write};

use crown_cover::{
    bounded_search, crown::CrownRule, cust_error::ProcessingError, graph::DyUGraph,
    kernelization::{KernelConfig, KernelResult}, kernelize_with, vc_instance::VCInstance,
};
use log::info;

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let k: isize = args
        .next()
        .ok_or("usage: decide <k> [--trivial-crowns] < graph.gr")?
        .parse()?;
    let mut config = KernelConfig::default();
    for arg in args {
        match arg.as_str() {
            "--trivial-crowns" => config.crown_rule = CrownRule::Trivial,
            _ => return Err(format!("unknown argument: {}", arg).into()),
        }
    }

    let stdin = io::stdin();
    let stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let graph = DyUGraph::read_gr(stdin)?;
    info!("Read graph with {} nodes and {} edges", graph.num_nodes(), graph.num_edges());

    let cover = match kernelize_with(&graph, k, &config)? {
        KernelResult::Infeasible => None,
        KernelResult::Kernel(kernel) => {
            info!("Kernel with {} nodes, {} edges and k = {}",
                  kernel.graph.num_nodes(), kernel.graph.num_edges(), kernel.k);
            bounded_search::find_cover(&kernel.graph, kernel.k).map(|cover| kernel.lift_cover(cover))
        },
    };

    match cover {
        Some(cover) => {
            // Validate
            if cover.len() > k as usize || !graph.is_vertex_cover(&cover) {
                return Err(Box::new(ProcessingError::InvalidSolution(
                    format!("{} nodes do not cover the graph within k = {}", cover.len(), k))));
            }
            writeln!(stdout, "yes")?;
            VCInstance::write_solution(&cover, &mut stdout)?;
        },
        None => writeln!(stdout, "no")?,
    }
    Ok(())
}
