use flexstr::{SharedStr as FlexStr, shared_fmt as flex_fmt};

use crate::config::Config;
use crate::constants::*;
use crate::error::MappingError;
use crate::graph::{Association, GraphSink};
use crate::ident::IdGenerator;
use crate::rows::DiseaseDrugGenotypeRow;
use crate::types::{Curie, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseDrugSummary {
    pub population_id: NodeId,
    pub genotype_id: NodeId,
    pub phenotype_id: NodeId,
    pub drug_id: NodeId,
    pub relation: Curie,
    // empty unless the row has a citation
    pub association_ids: Vec<NodeId>,
}

/// Links a synthetic patient population to a genotype, a diagnosis and a
/// drug.  The three edges are always added.  With a citation the same three
/// claims are also added as associations carrying the citation and the
/// evidence code.
pub struct DiseaseDrugMapper<'a> {
    ids: &'a IdGenerator,
    relation_prefix: FlexStr,
    citation_prefix: FlexStr,
    evidence_code: Curie,
}

/// "response to" -> "MONARCH:response_to"
pub fn relationship_token(relation_prefix: &str, relationship: &str) -> Curie {
    let name: String = relationship.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    flex_fmt!("{}:{}", relation_prefix, name)
}

pub fn population_label(diagnosis: &str, genotype_label: &str) -> FlexStr {
    flex_fmt!("Patient population diagnosed with {} with genotype {}",
              diagnosis, genotype_label)
}

impl<'a> DiseaseDrugMapper<'a> {
    pub fn new(ids: &'a IdGenerator, config: &Config) -> DiseaseDrugMapper<'a> {
        DiseaseDrugMapper {
            ids,
            relation_prefix: config.relation_prefix.clone(),
            citation_prefix: config.citation_prefix.clone(),
            evidence_code: config.evidence_code.clone(),
        }
    }

    pub fn add_disease_drug_genotype_rows<S>(&self, sink: &mut S, rows: &[DiseaseDrugGenotypeRow])
                                             -> Result<Vec<DiseaseDrugSummary>, MappingError>
        where S: GraphSink + ?Sized
    {
        rows.iter().map(|row| self.add_disease_drug_genotype(sink, row)).collect()
    }

    pub fn add_disease_drug_genotype<S>(&self, sink: &mut S, row: &DiseaseDrugGenotypeRow)
                                        -> Result<DiseaseDrugSummary, MappingError>
        where S: GraphSink + ?Sized
    {
        // NULL names are empty text in keys and descriptions but are never
        // added as labels
        let genotype_label = row.genotype_label.as_deref().unwrap_or_default();
        let diagnosis = row.diagnosis.as_deref().unwrap_or_default();
        let genotype_key: &str = row.genotype_key.as_ref();
        let diagnosis_key: &str = row.diagnosis_key.as_ref();
        let drug_key: &str = row.drug_key.as_ref();

        let population_id = self.ids.make_id(POPULATION_TAG, &[genotype_key, genotype_label]);
        let population_label = population_label(diagnosis, genotype_label);
        let genotype_id = self.ids.make_id(GENOTYPE_TAG, &[genotype_key]);
        let phenotype_id = self.ids.make_id(PHENOTYPE_TAG, &[diagnosis_key]);
        let relation = relationship_token(&self.relation_prefix, &row.relationship);
        let drug_id = self.ids.make_id(DRUG_TAG, &[drug_key]);

        sink.add_individual(&population_id, Some(population_label.as_ref()), POPULATION);
        sink.add_class(&phenotype_id, row.diagnosis.as_deref());
        sink.add_class(&drug_id, row.drug.as_deref());
        sink.add_object_property(&row.relationship, &relation);

        sink.add_triple(&population_id, HAS_GENOTYPE, &genotype_id);
        sink.add_triple(&population_id, HAS_PHENOTYPE, &phenotype_id);
        sink.add_triple(&population_id, &relation, &drug_id);

        let association_ids =
            if let Some(ref citation_id) = row.citation_id {
                let source = flex_fmt!("{}:{}", self.citation_prefix, citation_id);

                let relation_name: &str = relation.as_ref();

                let claims = [
                    (row.genotype_label.as_deref(), HAS_GENOTYPE, &genotype_id),
                    (row.diagnosis.as_deref(), HAS_PHENOTYPE, &phenotype_id),
                    (row.drug.as_deref(), relation_name, &drug_id),
                ];

                claims.iter()
                    .map(|&(object_label, relation, object_id)| {
                        // the object's id stands in for a NULL name so the
                        // three claims keep distinct ids
                        let object_key = object_label.unwrap_or(object_id);
                        let association_id = self.ids.make_id(&population_id, &[object_key]);
                        sink.add_association(Association {
                            id: association_id.clone(),
                            subject: population_id.clone(),
                            relation: relation.into(),
                            object: object_id.clone(),
                            source: source.clone(),
                            evidence: self.evidence_code.clone(),
                        });
                        association_id
                    })
                    .collect()
            } else {
                vec![]
            };

        Ok(DiseaseDrugSummary {
            population_id,
            genotype_id,
            phenotype_id,
            drug_id,
            relation,
            association_ids,
        })
    }
}
