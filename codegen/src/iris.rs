//! Well-known vocabulary IRIs used by the generator.

/// `rdf:type`
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `owl:Ontology`
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

/// `rdfs:comment`
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:label`
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `dcterms:description`
pub const DCTERMS_DESCRIPTION: &str = "http://purl.org/dc/terms/description";
/// `dcterms:title`
pub const DCTERMS_TITLE: &str = "http://purl.org/dc/terms/title";
/// `dc:description`
pub const DC_DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
/// `dc:title`
pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
/// `skos:definition`
pub const SKOS_DEFINITION: &str = "http://www.w3.org/2004/02/skos/core#definition";
