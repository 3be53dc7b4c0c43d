//! Template file contents
//!
//! Placeholders: `{{name}}` (verbatim), `{{snake}}`, `{{type_name}}` and
//! `{{command_name}}`. See [`crate::name::ProjectName`] for how each is derived.

/// `lua/<name>/init.lua`
pub const INIT_LUA: &str = r#"local M = {}

---@class {{type_name}}Config
---@field enabled boolean Enable the plugin
M.config = {
  enabled = true,
}

--- Setup the plugin
---@param opts {{type_name}}Config|nil
function M.setup(opts)
  M.config = vim.tbl_deep_extend("force", M.config, opts or {})

  if not M.config.enabled then
    return
  end

  -- Initialize plugin
  require("{{name}}.commands").setup()
  require("{{name}}.autocmds").setup()
end

return M
"#;

/// `lua/<name>/config.lua`
pub const CONFIG_LUA: &str = r"local M = {}

---@type {{type_name}}Config
M.defaults = {
  enabled = true,
  -- Add default options here
}

return M
";

/// `lua/<name>/commands.lua`
pub const COMMANDS_LUA: &str = r#"local M = {}

function M.setup()
  vim.api.nvim_create_user_command("{{command_name}}", function(opts)
    -- Command implementation
    vim.notify("{{name}}: Command executed", vim.log.levels.INFO)
  end, {
    nargs = "*",
    desc = "{{name}} main command",
  })
end

return M
"#;

/// `lua/<name>/autocmds.lua`
pub const AUTOCMDS_LUA: &str = r#"local M = {}

function M.setup()
  local group = vim.api.nvim_create_augroup("{{snake}}", { clear = true })

  -- Example autocommand
  -- vim.api.nvim_create_autocmd("BufEnter", {
  --   group = group,
  --   pattern = "*",
  --   callback = function(ev)
  --     -- Handle event
  --   end,
  -- })
end

return M
"#;

/// `lua/<name>/utils.lua`
pub const UTILS_LUA: &str = r"local M = {}

--- Log a debug message
---@param msg string
function M.debug(msg)
  if vim.g.debug_mode then
    vim.notify(msg, vim.log.levels.DEBUG)
  end
end

--- Safe require with fallback
---@param module string
---@return any|nil
function M.safe_require(module)
  local ok, result = pcall(require, module)
  if not ok then
    return nil
  end
  return result
end

return M
";

/// `lua/<name>/health.lua`
pub const HEALTH_LUA: &str = r#"local M = {}

function M.check()
  vim.health.start("{{name}}")

  -- Check Neovim version
  if vim.fn.has("nvim-0.9") == 1 then
    vim.health.ok("Neovim >= 0.9")
  else
    vim.health.error("Neovim >= 0.9 required")
  end

  -- Check dependencies
  local ok, _ = pcall(require, "plenary")
  if ok then
    vim.health.ok("plenary.nvim found")
  else
    vim.health.warn("plenary.nvim not found (optional)")
  end
end

return M
"#;

/// `plugin/<name>.lua`
pub const PLUGIN_LUA: &str = r#"-- Optional: Trigger loading on VimEnter
-- Remove this file if using lazy.nvim with explicit triggers

if vim.g.loaded_{{snake}} then
  return
end
vim.g.loaded_{{snake}} = true

-- Defer setup to allow user configuration
vim.api.nvim_create_autocmd("User", {
  pattern = "VeryLazy",
  callback = function()
    -- Only auto-setup if not already configured
    if not vim.g.{{snake}}_configured then
      require("{{name}}").setup()
    end
  end,
})
"#;

/// `doc/<name>.txt`
pub const HELP_TXT: &str = r#"*{{name}}.txt*  Description of {{name}}

==============================================================================
CONTENTS                                                    *{{name}}-contents*

    1. Introduction .......................... |{{name}}-introduction|
    2. Setup ................................. |{{name}}-setup|
    3. Commands .............................. |{{name}}-commands|
    4. Configuration ......................... |{{name}}-configuration|

==============================================================================
1. INTRODUCTION                                         *{{name}}-introduction*

{{name}} is a Neovim plugin that...

==============================================================================
2. SETUP                                                       *{{name}}-setup*

Using lazy.nvim: >lua
    {
      "{{name}}",
      opts = {},
    }
<

==============================================================================
3. COMMANDS                                                 *{{name}}-commands*

:{{command_name}}                                            *:{{command_name}}*
    Main command for {{name}}.

==============================================================================
4. CONFIGURATION                                       *{{name}}-configuration*

Default configuration: >lua
    require("{{name}}").setup({
      enabled = true,
    })
<

vim:tw=78:ts=8:ft=help:norl:
"#;

/// `tests/plugin_spec.lua`
pub const PLUGIN_SPEC_LUA: &str = r#"describe("{{name}}", function()
  local plugin = require("{{name}}")

  before_each(function()
    -- Reset state before each test
  end)

  it("should have default config", function()
    assert.is_not_nil(plugin.config)
    assert.is_true(plugin.config.enabled)
  end)

  it("should merge user config", function()
    plugin.setup({ enabled = false })
    assert.is_false(plugin.config.enabled)
  end)
end)
"#;

/// `tests/minimal_init.lua`
pub const MINIMAL_INIT_LUA: &str = r#"-- Minimal init for running tests
vim.opt.runtimepath:append(".")
vim.opt.runtimepath:append("../plenary.nvim")

vim.cmd([[runtime plugin/plenary.vim]])
"#;

/// `README.md`
pub const README_MD: &str = r#"# {{name}}

Description of {{name}}.

## Installation

Using [lazy.nvim](https://github.com/folke/lazy.nvim):

```lua
{
  "{{name}}",
  opts = {},
}
```

## Configuration

```lua
require("{{name}}").setup({
  enabled = true,
})
```

## Commands

- `:{{command_name}}` - Main command

## License

MIT
"#;

/// `LICENSE`
pub const LICENSE: &str = r#"MIT License

Copyright (c) 2024

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

/// `.gitignore`
pub const GITIGNORE: &str = r"# Neovim
*.swp
*.swo
*~

# Luarocks
*.rock
lua_modules/

# Testing
.tests/
coverage/

# OS
.DS_Store
Thumbs.db
";

/// `stylua.toml`
pub const STYLUA_TOML: &str = r#"column_width = 100
line_endings = "Unix"
indent_type = "Spaces"
indent_width = 2
quote_style = "AutoPreferDouble"
call_parentheses = "Always"
"#;
