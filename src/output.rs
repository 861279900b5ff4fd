//! src/output.rs
use crate::aggregate::CountRecord;
use anyhow::Context;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes final count records into a directory of hash-partitioned text
/// files, `part-r-00000` onwards, one `key\tcount` record per line. Record
/// order within a partition is unspecified.
pub struct PartitionedCountWriter {
    output_dir: PathBuf,
    partition_count: usize,
    writers: HashMap<usize, BufWriter<File>>,
}

impl PartitionedCountWriter {
    pub fn new(output_dir: impl AsRef<Path>, partition_count: usize) -> anyhow::Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        create_dir_all(&output_dir).context("Failed to create output directory")?;
        Ok(Self {
            output_dir,
            partition_count: partition_count.max(1),
            writers: HashMap::new(),
        })
    }

    pub fn get_partition(&self, key: &str) -> usize {
        let mut hash = 0usize;

        for byte in key.bytes() {
            hash = hash.wrapping_mul(31).wrapping_add(byte as usize);
        }

        hash % self.partition_count
    }

    fn get_writer(&mut self, partition: usize) -> anyhow::Result<&mut BufWriter<File>> {
        match self.writers.entry(partition) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file_path = self.output_dir.join(format!("part-r-{:05}", partition));
                let file = File::create(&file_path).context(format!(
                    "Failed to create partition file: {}",
                    file_path.display()
                ))?;
                Ok(entry.insert(BufWriter::new(file)))
            }
        }
    }

    pub fn write(&mut self, record: &CountRecord) -> anyhow::Result<()> {
        let partition = self.get_partition(&record.key);
        let writer = self.get_writer(partition)?;
        writeln!(writer, "{}\t{}", record.key, record.count)
            .context("Failed to write record to partition file")?;
        Ok(())
    }

    /// Flushes and drops all writers.
    pub fn close(mut self) -> anyhow::Result<()> {
        for writer in self.writers.values_mut() {
            writer.flush().context("Failed to flush partition file")?;
        }
        Ok(())
    }
}
