use flexstr::SharedStr as FlexStr;

pub type Curie = FlexStr;
pub type NodeId = FlexStr;
pub type Label = FlexStr;

pub type GenotypeKey = FlexStr;
pub type GenotypeLabel = FlexStr;
pub type TranscriptId = FlexStr;
pub type GeneSymbol = FlexStr;
pub type GeneId = FlexStr;
pub type DiagnosisKey = FlexStr;
pub type DrugKey = FlexStr;
pub type CitationId = FlexStr;

pub type ResidueCode = FlexStr;
pub type ProteinPosition = u32;

// a nullable column value, as fetched from the database or a TSV file
pub type Field = Option<FlexStr>;
pub type RawRow = Vec<Field>;
