use std::path::{Path, PathBuf};

/// Fixture tree the test cases are discovered in, relative to the root.
pub const TEST_DIR: &str = "tests/2017-10-04/art";

/// Where the generated Java sources go, relative to the root.
pub const OUTPUT_DIR: &str = "build/generated/test/java/com/android/tools/r8/art";

/// Extension of every generated file.
pub const SOURCE_EXTENSION: &str = "java";

#[derive(Debug, PartialEq, Clone)]
pub struct Layout {
    pub test_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Layout {
        Layout {
            test_dir: PathBuf::from(TEST_DIR),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl Layout {
    /// The default layout resolved against `root`.
    pub fn rooted(root: &Path) -> Layout {
        Layout {
            test_dir: root.join(TEST_DIR),
            output_dir: root.join(OUTPUT_DIR),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Toolchain {
    pub name: &'static str,
    /// Subdirectory of the fixture root holding this toolchain's test cases.
    pub fixture: &'static str,
}

impl Toolchain {
    pub fn enum_name(&self) -> String {
        self.name.to_uppercase()
    }
}

// Both toolchains run the tests dx produced.
pub const TOOLCHAINS: [Toolchain; 2] = [
    Toolchain {
        name: "dx",
        fixture: "dx",
    },
    Toolchain {
        name: "none",
        fixture: "dx",
    },
];

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Tool {
    R8,
    D8,
    R8Cf,
}

pub const TOOLS: [Tool; 3] = [Tool::R8, Tool::D8, Tool::R8Cf];

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::R8 => "r8",
            Tool::D8 => "d8",
            Tool::R8Cf => "r8cf",
        }
    }

    /// The `CompilerUnderTest` constant this tool resolves to under
    /// `toolchain`, or `None` when the pair is not generated at all.
    pub fn enum_name(&self, toolchain: &Toolchain) -> Option<&'static str> {
        match (self, toolchain.name) {
            (Tool::R8, _) => Some("R8"),
            (Tool::D8, "none") => Some("R8_AFTER_D8"),
            (Tool::D8, _) => Some("D8"),
            // r8cf only makes sense on the untransformed fixtures
            (Tool::R8Cf, "none") => Some("D8_AFTER_R8CF"),
            (Tool::R8Cf, _) => None,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub tool: Tool,
    pub tool_enum: &'static str,
    pub toolchain: Toolchain,
    pub source_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Configuration {
    pub fn toolchain_enum(&self) -> String {
        self.toolchain.enum_name()
    }
}

/// Every (toolchain, tool) pair to generate, toolchains outermost.
pub fn configurations(layout: &Layout) -> Vec<Configuration> {
    let mut configs = Vec::new();
    for toolchain in TOOLCHAINS {
        for tool in TOOLS {
            let tool_enum = match tool.enum_name(&toolchain) {
                Some(e) => e,
                None => continue,
            };
            configs.push(Configuration {
                tool,
                tool_enum,
                toolchain,
                source_dir: layout.test_dir.join(toolchain.fixture),
                output_dir: layout.output_dir.join(toolchain.name).join(tool.name()),
            });
        }
    }
    configs
}
