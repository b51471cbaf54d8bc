//! Integration tests for content model construction.

use deckmodel::{
    build_model, build_models, ingest_with, render, BuildOptions, ContentModel, ContentNode,
    DeckSource, DetectedCell, DetectedTable, DocumentAnalysis, FontInfo, LayoutBlock, OcrSource,
    RawRun, Result, SlideElement, SlideSource, SourceDocument, SourceKind,
};

/// Mock analysis backend for testing the ingestion seam.
struct MockAnalysis {
    name: &'static str,
    fail: bool,
}

impl MockAnalysis {
    fn ok(name: &'static str) -> Self {
        Self { name, fail: false }
    }

    fn failing(name: &'static str) -> Self {
        Self { name, fail: true }
    }
}

impl DocumentAnalysis for MockAnalysis {
    fn name(&self) -> &str {
        self.name
    }

    fn analyze(&self, data: &[u8]) -> Result<OcrSource> {
        if self.fail {
            return Err(deckmodel::Error::Analysis {
                backend: self.name.to_string(),
                message: "simulated service failure".to_string(),
            });
        }

        let text = String::from_utf8_lossy(data);
        Ok(OcrSource {
            blocks: text
                .lines()
                .map(|line| {
                    if let Some(heading) = line.strip_prefix("# ") {
                        LayoutBlock::Heading {
                            text: heading.to_string(),
                        }
                    } else {
                        LayoutBlock::Line {
                            text: line.to_string(),
                        }
                    }
                })
                .collect(),
            source_file: None,
        })
    }
}

fn mixed_ocr_source() -> SourceDocument {
    SourceDocument::Ocr(OcrSource {
        blocks: vec![
            LayoutBlock::Heading {
                text: "Q3 Report".to_string(),
            },
            LayoutBlock::Line {
                text: "Revenue summary follows.".to_string(),
            },
            LayoutBlock::Table(DetectedTable {
                row_count: 2,
                col_count: 2,
                cells: vec![
                    DetectedCell::at(0, 0, "Region"),
                    DetectedCell::at(0, 1, "Revenue"),
                    DetectedCell::at(1, 0, "EMEA"),
                    DetectedCell::at(1, 1, "1.2M"),
                ],
            }),
            LayoutBlock::Markup {
                text: "no table markup in this fragment".to_string(),
            },
            LayoutBlock::Image {
                path: "images/chart.png".to_string(),
            },
            LayoutBlock::Heading {
                text: "Appendix".to_string(),
            },
            LayoutBlock::Line {
                text: "Fine print.".to_string(),
            },
        ],
        source_file: Some("report.pdf".to_string()),
    })
}

#[test]
fn test_ocr_document_end_to_end() {
    let model = build_model(mixed_ocr_source());

    assert_eq!(model.source.kind, SourceKind::Ocr);
    assert_eq!(model.sections.len(), 2);

    let report = &model.sections[0];
    assert_eq!(report.heading, "Q3 Report");
    assert_eq!(report.content.len(), 4);

    // Source order is preserved node for node.
    assert!(matches!(&report.content[0], ContentNode::Text(_)));
    let ContentNode::Table(table) = &report.content[1] else {
        panic!("expected reconstructed table");
    };
    assert!(table.is_rectangular());
    assert_eq!(table.rows[1], vec!["EMEA", "1.2M"]);

    // The markup block had no table; it degrades in place, keeping
    // its slot, and processing of sibling blocks continues.
    assert!(report.content[2].is_empty_table());
    assert!(matches!(&report.content[3], ContentNode::Image { path } if path == "images/chart.png"));

    assert_eq!(model.sections[1].heading, "Appendix");
}

#[test]
fn test_deck_document_end_to_end() {
    let source = SourceDocument::Deck(DeckSource {
        slides: vec![SlideSource {
            title: Some(vec![
                RawRun::styled("Roadmap ", FontInfo::named("Arial", 28.0)),
                RawRun::styled("2026", FontInfo::named("Arial", 28.0).bold()),
            ]),
            body: vec![
                SlideElement::Paragraph {
                    runs: vec![
                        RawRun::styled("Intro", FontInfo::named("Arial", 12.0)),
                        RawRun::styled("Important point", FontInfo::named("Arial", 12.0).bold()),
                    ],
                    level: 0,
                },
                SlideElement::Picture {
                    path: "images/slide_1_image_0.png".to_string(),
                },
            ],
        }],
        source_file: Some("template.pptx".to_string()),
    });

    let model = build_model(source);
    let slide = &model.sections[0];

    assert_eq!(slide.heading, "Roadmap 2026");
    assert_eq!(slide.metadata.slide_number, Some(1));
    // "Roadmap " (8 chars) beats "2026": title font is the regular run.
    assert!(!slide.metadata.title_font.as_ref().unwrap().bold);

    let ContentNode::Text(block) = &slide.content[0] else {
        panic!("expected text node");
    };
    assert_eq!(block.text, "IntroImportant point");
    // Longest run wins the block font decision.
    assert!(block.dominant_font.bold);
}

#[test]
fn test_one_source_one_model() {
    // Two documents in, two models out; contents never mix.
    let models = build_models(vec![
        mixed_ocr_source(),
        SourceDocument::Deck(DeckSource {
            slides: vec![SlideSource::default()],
            source_file: Some("design.pptx".to_string()),
        }),
    ]);

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].source.source_file.as_deref(), Some("report.pdf"));
    assert_eq!(models[1].source.source_file.as_deref(), Some("design.pptx"));
    assert_eq!(models[1].sections.len(), 1);
    assert!(models[1].sections[0].is_empty());
}

#[test]
fn test_ingest_with_mock_backend() {
    let backend = MockAnalysis::ok("mock");
    let model = ingest_with(&backend, b"# Title\nbody line").unwrap();

    assert_eq!(model.sections.len(), 1);
    assert_eq!(model.sections[0].heading, "Title");
    assert_eq!(model.sections[0].content.len(), 1);
}

#[test]
fn test_ingest_backend_failure_is_fatal() {
    let backend = MockAnalysis::failing("mock");
    let err = ingest_with(&backend, b"anything").unwrap_err();
    assert!(err.to_string().contains("mock"));
}

#[test]
fn test_model_json_survives_file_round_trip() {
    let model = build_model(mixed_ocr_source());
    let json = render::to_json(&model, render::JsonFormat::Pretty).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, &json).unwrap();

    let loaded: ContentModel = serde_json::from_str(&std::fs::read_to_string(&path).unwrap())
        .unwrap();
    assert_eq!(loaded, model);
}

#[test]
fn test_markdown_render_of_built_model() {
    let model = build_model(mixed_ocr_source());
    let md = render::to_markdown(&model);

    assert!(md.contains("## Q3 Report"));
    assert!(md.contains("| Region | Revenue |"));
    assert!(md.contains("![Image](images/chart.png)"));
    assert!(md.contains("## Appendix"));
}

#[test]
fn test_keep_empty_blocks_option_through_ingest() {
    let backend = MockAnalysis::ok("mock");
    let data = b"# H\n\nkept";

    let default_model = ingest_with(&backend, data).unwrap();
    assert_eq!(default_model.node_count(), 1);

    let keep_all = deckmodel::ingest::ingest_document(
        &backend,
        data,
        BuildOptions::new().with_empty_blocks(true),
    )
    .unwrap();
    assert_eq!(keep_all.node_count(), 2);
}
