//! Prompt text for each catalog entry

pub(crate) const ICON_PROMPT: &str = r##"Create a modern app icon for "PasteHost" - a clipboard deployment tool.

DESIGN:
- Square icon with rounded corners (like iOS/Android app icons)
- Size: 128x128 pixels
- Background: Gradient from deep blue #1976D2 to purple #7B1FA2

MAIN ELEMENTS:
- Center: A stylized clipboard icon (white outline, slightly tilted)
- On the clipboard: A rocket ship launching upward 🚀
- The rocket has a small flame trail (orange #FF9800 to yellow #FFEB3B gradient)
- Small cloud/deploy icons around the rocket

STYLE:
- Modern, flat design with subtle shadows
- Clean lines, minimalist
- Professional but friendly
- The clipboard represents "copy" and the rocket represents "deploy/ship"

COLOR PALETTE:
- Primary: #1976D2 (blue)
- Secondary: #7B1FA2 (purple)
- Accent: #FF9800 (orange), #FFEB3B (yellow)
- Icons: White #FFFFFF

NO TEXT - icon only."##;

pub(crate) const PROMO_SMALL_PROMPT: &str = r##"Create a promotional banner for "PasteHost" Chrome extension.

SIZE: 440x280 pixels (landscape)

BACKGROUND:
- Gradient from dark blue #0D47A1 on left to purple #4A148C on right
- Subtle grid pattern overlay (tech feel)

LEFT SIDE (40%):
- Large "PasteHost" text in white, bold modern font
- Below: "Clipboard → Web" in smaller text
- Small rocket emoji 🚀

RIGHT SIDE (60%):
- Illustration showing the workflow:
  1. Clipboard icon (white) with code/markdown inside
  2. Arrow pointing right
  3. Browser window showing a beautiful webpage
  4. Netlify and GitHub logos (small, subtle)

BOTTOM:
- Small icons representing features:
  - Markdown icon (M↓)
  - Code brackets { }
  - Diagram/flowchart icon
  - Lightning bolt (fast)

STYLE:
- Modern, tech-focused design
- Clean and professional
- High contrast for readability
- Chrome Web Store promotional tile aesthetic"##;

pub(crate) const PROMO_LARGE_PROMPT: &str = r##"Create a large promotional banner for "PasteHost" Chrome extension.

SIZE: 920x680 pixels (landscape)

BACKGROUND:
- Dark gradient: #0D47A1 (blue) to #311B92 (deep purple)
- Subtle geometric patterns (hexagons, dots)

HEADER (top 30%):
- "PasteHost" logo/text - large, white, modern sans-serif font
- Tagline: "Deploy Clipboard to Web Instantly" in light blue #64B5F6
- Small rocket icon next to logo

CENTER (main area, 50%):
- Three-step workflow illustration:

  STEP 1 (left):
  - Clipboard icon with "Ctrl+C" badge
  - Sample content showing Markdown/HTML code
  - Label: "Copy"

  STEP 2 (center):
  - PasteHost extension popup mockup
  - Two buttons: "Netlify" and "Gist"
  - Label: "Click"

  STEP 3 (right):
  - Browser showing rendered webpage
  - Beautiful formatted content with code highlighting
  - URL bar showing netlify.app domain
  - Label: "Live!"

- Curved arrows connecting the steps

BOTTOM (20%):
- Feature icons in a row:
  - "HTML" with checkmark
  - "Markdown" with checkmark
  - "Syntax Highlighting" with code icon
  - "Mermaid Diagrams" with flowchart icon
  - "Instant Deploy" with lightning icon

FOOTER:
- Netlify logo (small)
- GitHub logo (small)
- "Free & Open Source" badge

STYLE:
- Professional SaaS/developer tool aesthetic
- Clean, modern, high-tech feel
- Easy to understand workflow
- Appealing to developers"##;

pub(crate) const SCREENSHOT_POPUP_PROMPT: &str = r##"Create a screenshot mockup for PasteHost Chrome extension popup.

SIZE: 1280x800 pixels

BACKGROUND:
- A code editor (VS Code style) showing Markdown content
- Dark theme editor with syntax highlighting
- The Markdown contains:
  ```markdown
  # Hello World

  This is a **demo** of PasteHost.

  ```javascript
  console.log('Hello!');
  ```
  ```

POPUP OVERLAY (center-right):
- Chrome extension popup window (300px wide)
- White background with shadow
- Header: "PasteHost" with small rocket icon
- Two large buttons:
  1. "Deploy to Netlify" - Blue button #1976D2
  2. "Deploy to Gist" - Green button #388E3C
- Status area showing: "Ready to deploy"
- Small settings gear icon in corner

ANNOTATION ARROWS:
- Arrow from clipboard icon to popup: "1. Copy content"
- Arrow from Netlify button: "2. Click to deploy"
- Arrow pointing to imaginary browser: "3. Get shareable URL"

BOTTOM BANNER:
- Light overlay with text: "One-click deployment for HTML, Markdown & more"

STYLE:
- Realistic Chrome browser mockup
- Professional screenshot for Chrome Web Store
- Clear, easy to understand workflow"##;

pub(crate) const SCREENSHOT_RESULT_PROMPT: &str = r##"Create a screenshot showing PasteHost deployment result.

SIZE: 1280x800 pixels

MAIN CONTENT:
- Browser window showing a deployed webpage
- URL bar: "https://pastehost-abc123.netlify.app/xyz789/index.html"
- Green lock icon (HTTPS)

WEBPAGE CONTENT (rendered Markdown):
- Clean, beautiful rendered page with:
  - Large heading "# Project Documentation"
  - Formatted paragraphs
  - Code block with syntax highlighting (JavaScript)
  - A Mermaid flowchart diagram showing:
    ```
    graph TD
      A[Start] --> B{Decision}
      B -->|Yes| C[Action 1]
      B -->|No| D[Action 2]
    ```
  - Bullet list
  - Table with data

POPUP OVERLAY (bottom-right):
- PasteHost popup showing success state:
  - Green checkmark ✓
  - "Success!" text
  - URL link (clickable)
  - "Copied to clipboard!" message

ANNOTATION:
- Callout bubble: "Instant live preview!"
- Arrow pointing to Mermaid diagram: "Mermaid diagrams supported"
- Arrow pointing to code: "Syntax highlighting"

STYLE:
- Realistic browser mockup
- Shows the power of the extension
- Professional and polished"##;

pub(crate) const SCREENSHOT_OPTIONS_PROMPT: &str = r##"Create a screenshot of PasteHost options/settings page.

SIZE: 1280x800 pixels

BROWSER WINDOW:
- Chrome browser with extension options page
- URL: "chrome-extension://xxx/options.html"

OPTIONS PAGE CONTENT:
- Clean white background
- Header: "PasteHost Settings" with gear icon

FORM SECTIONS:

Section 1 - Netlify:
- Netlify logo (teal color)
- Label: "Netlify Personal Access Token"
- Password input field (dots showing hidden token)
- Help text: "Get token from app.netlify.com → User Settings → Applications"
- Link: "Get your token →"

Section 2 - GitHub:
- GitHub logo (black)
- Label: "GitHub Personal Access Token"
- Password input field
- Help text: "Requires 'gist' scope"
- Link: "Create token →"

BOTTOM:
- "Save" button (blue #1976D2)
- "Saved!" success message with checkmark

SIDEBAR INFO:
- "About PasteHost" section
- Version: 1.0.0
- Links: Documentation, Report Issue, Privacy Policy

STYLE:
- Clean settings page design
- Clear form layout
- Professional Chrome extension options aesthetic
- Easy to understand where to get tokens"##;
