//! GPU Floyd-Warshall kernel (feature `gpu`).
//!
//! The distance matrix lives in a storage buffer on the device; one compute
//! invocation owns one cell and loops over pivots are driven from the host,
//! one dispatch per pivot. Queue submission order gives the required
//! barrier: pivot k + 1 never starts before pivot k has fully relaxed.

use bytemuck::{Pod, Zeroable};
use keyplayer_core::{DistanceMatrix, KeyPlayerError, NetworkGraph, Result};
use wgpu::util::DeviceExt;

const WORKGROUP_SIZE: u32 = 64;

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
struct Params {
    n: u32,
    k: u32,
}

/// All-pairs shortest paths on the GPU.
pub(crate) fn gpu_distances(graph: &NetworkGraph) -> Result<DistanceMatrix> {
    pollster::block_on(run(graph))
}

async fn run(graph: &NetworkGraph) -> Result<DistanceMatrix> {
    let n = graph.vertex_count();
    if n == 0 {
        return Ok(DistanceMatrix::unreachable(0));
    }
    let cells = crate::parallel::seed_cells(graph);

    let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            ..Default::default()
        })
        .await
        .ok_or_else(|| KeyPlayerError::Gpu("no compatible adapter found".to_string()))?;
    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor::default(), None)
        .await
        .map_err(|e| KeyPlayerError::Gpu(e.to_string()))?;

    let byte_len = (cells.len() * std::mem::size_of::<u32>()) as u64;
    let dist_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("distance-cells"),
        contents: bytemuck::cast_slice(&cells),
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
    });
    let params_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("pivot-params"),
        size: std::mem::size_of::<Params>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("distance-readback"),
        size: byte_len,
        usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("floyd-warshall-relax"),
        source: wgpu::ShaderSource::Wgsl(include_str!("relax.wgsl").into()),
    });
    let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
        label: Some("relax-pipeline"),
        layout: None,
        module: &shader,
        entry_point: "relax",
        compilation_options: Default::default(),
        cache: None,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("relax-bind-group"),
        layout: &pipeline.get_bind_group_layout(0),
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: dist_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: params_buffer.as_entire_binding(),
            },
        ],
    });

    let workgroups = (n * n).div_ceil(WORKGROUP_SIZE as usize) as u32;
    for k in 0..n as u32 {
        queue.write_buffer(
            &params_buffer,
            0,
            bytemuck::bytes_of(&Params { n: n as u32, k }),
        );
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("relax-pass"),
        });
        {
            let mut pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("relax"),
                timestamp_writes: None,
            });
            pass.set_pipeline(&pipeline);
            pass.set_bind_group(0, &bind_group, &[]);
            pass.dispatch_workgroups(workgroups, 1, 1);
        }
        // Submission boundary = inter-pivot barrier.
        queue.submit(Some(encoder.finish()));
    }

    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("readback"),
    });
    encoder.copy_buffer_to_buffer(&dist_buffer, 0, &staging_buffer, 0, byte_len);
    queue.submit(Some(encoder.finish()));

    let slice = staging_buffer.slice(..);
    let (sender, receiver) = std::sync::mpsc::channel();
    slice.map_async(wgpu::MapMode::Read, move |result| {
        let _ = sender.send(result);
    });
    device.poll(wgpu::Maintain::Wait);
    receiver
        .recv()
        .map_err(|_| KeyPlayerError::Gpu("device disconnected during readback".to_string()))?
        .map_err(|e| KeyPlayerError::Gpu(e.to_string()))?;

    let mapped = slice.get_mapped_range();
    let out: Vec<u32> = bytemuck::cast_slice(&mapped).to_vec();
    drop(mapped);
    staging_buffer.unmap();

    Ok(DistanceMatrix::from_cells(n, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyplayer_test::{kite_graph, path_graph};

    #[test]
    #[ignore = "requires a GPU adapter"]
    fn test_gpu_matches_cpu_kernel() {
        for g in [path_graph(6), kite_graph()] {
            let gpu = gpu_distances(&g).unwrap();
            let cpu = crate::parallel::floyd_warshall(&g);
            assert_eq!(gpu, cpu);
        }
    }
}
