//!
//! Output formats of genotype probabilities
//!
use crate::common::Genotype;
use crate::genoprob::GenoProbs;
use serde::Serialize;

///
/// JSON representation
///
/// `probs[individual][marker][genotype]`
///
#[derive(Serialize)]
struct GenoProbsJson {
    genotypes: Vec<String>,
    n_individuals: usize,
    n_markers: usize,
    probs: Vec<Vec<Vec<f64>>>,
}

///
/// dump functions
///
/// ```text
/// individual  marker  AA      AB
/// 0           0       0.9122  0.0878
/// 0           1       0.0450  0.9550
/// ```
///
impl GenoProbs {
    ///
    /// TSV with a line for each (individual, marker)
    ///
    pub fn to_writer<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        write!(writer, "individual\tmarker")?;
        for g in Genotype::all().iter() {
            write!(writer, "\t{}", g)?;
        }
        writeln!(writer)?;
        for ind in 0..self.n_individuals() {
            for m in 0..self.n_markers() {
                write!(writer, "{}\t{}", ind, m)?;
                for &g in Genotype::all().iter() {
                    write!(writer, "\t{}", self.get(g, ind, m))?;
                }
                writeln!(writer)?;
            }
        }
        Ok(())
    }
    ///
    /// create string with `to_writer`
    ///
    pub fn to_tsv_string(&self) -> String {
        let mut writer = Vec::with_capacity(128);
        // writing into Vec<u8> never fails
        let _ = self.to_writer(&mut writer);
        String::from_utf8_lossy(&writer).into_owned()
    }
    ///
    /// create file with `to_writer`
    ///
    pub fn to_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_writer(std::io::BufWriter::new(file))
    }
    ///
    /// JSON of `{genotypes, n_individuals, n_markers, probs}`
    ///
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> std::io::Result<()> {
        let json = GenoProbsJson {
            genotypes: Genotype::all().iter().map(|g| g.to_string()).collect(),
            n_individuals: self.n_individuals(),
            n_markers: self.n_markers(),
            probs: (0..self.n_individuals())
                .map(|ind| {
                    let view = self.individual(ind);
                    view.columns()
                        .into_iter()
                        .map(|col| col.to_vec())
                        .collect()
                })
                .collect(),
        };
        serde_json::to_writer(writer, &json)?;
        Ok(())
    }
    ///
    /// create file with `to_json_writer`
    ///
    pub fn to_json_file<P: AsRef<std::path::Path>>(&self, path: P) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        self.to_json_writer(std::io::BufWriter::new(file))
    }
}
