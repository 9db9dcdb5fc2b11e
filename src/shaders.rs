//! GLSL sources for both effects.
//!
//! Written in GLSL ES 1.00 so they link on either WebGL context version.

/// Fullscreen quad as two triangles, clip-space XY pairs.
pub const QUAD_VERTICES: [f32; 12] = [
    -1.0, -1.0, 1.0, -1.0, -1.0, 1.0, //
    -1.0, 1.0, 1.0, -1.0, 1.0, 1.0,
];

/// Quad vertex stage for the text effect. V is flipped so row 0 of the
/// captured bitmap lands at the top of the screen.
pub const FLUID_VERTEX: &str = r#"
attribute vec2 position;
varying vec2 vUv;
void main() {
    vUv = position * 0.5 + 0.5;
    vUv.y = 1.0 - vUv.y;
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub const FLUID_FRAGMENT: &str = r#"
precision highp float;
varying vec2 vUv;
uniform sampler2D uText;
uniform vec2 uMouse;
uniform float uTime;
uniform vec2 uResolution;
uniform vec2 uPadding;

vec3 permute(vec3 x) { return mod(((x * 34.0) + 1.0) * x, 289.0); }

// 2D simplex noise, range roughly [-1, 1].
float snoise(vec2 v) {
    const vec4 C = vec4(0.211324865405187, 0.366025403784439,
                        -0.577350269189626, 0.024390243902439);
    vec2 i = floor(v + dot(v, C.yy));
    vec2 x0 = v - i + dot(i, C.xx);
    vec2 i1 = (x0.x > x0.y) ? vec2(1.0, 0.0) : vec2(0.0, 1.0);
    vec4 x12 = x0.xyxy + C.xxzz;
    x12.xy -= i1;
    i = mod(i, 289.0);
    vec3 p = permute(permute(i.y + vec3(0.0, i1.y, 1.0)) + i.x + vec3(0.0, i1.x, 1.0));
    vec3 m = max(0.5 - vec3(dot(x0, x0), dot(x12.xy, x12.xy), dot(x12.zw, x12.zw)), 0.0);
    m = m * m;
    m = m * m;
    vec3 x = 2.0 * fract(p * C.www) - 1.0;
    vec3 h = abs(x) - 0.5;
    vec3 a0 = x - floor(x + 0.5);
    m *= 1.79284291400159 - 0.85373472095314 * (a0 * a0 + h * h);
    vec3 g;
    g.x = a0.x * x0.x + h.x * x0.y;
    g.yz = a0.yz * x12.xz + h.yz * x12.yw;
    return 130.0 * dot(m, g);
}

void main() {
    vec2 uv = vUv * (1.0 - uPadding * 2.0) + uPadding;

    float aspect = uResolution.x / uResolution.y;
    float dist = distance(vec2(vUv.x * aspect, vUv.y), vec2(uMouse.x * aspect, uMouse.y));
    float interaction = smoothstep(0.45, 0.0, dist);

    float n = snoise(vUv * 3.0 + vec2(uTime * 0.1, uTime * 0.05));
    float n2 = snoise(vUv * 6.0 - vec2(uTime * 0.08, uTime * 0.12));
    vec2 displacement = vec2(n, n2) * interaction * 0.08;

    float texR = texture2D(uText, uv + displacement * 1.4).r;
    float texG = texture2D(uText, uv + displacement * 1.0).g;
    float texB = texture2D(uText, uv + displacement * 0.6).b;
    float alpha = max(texR, max(texG, texB));

    vec3 paper = vec3(1.0);
    vec3 liquid = mix(vec3(0.0, 0.3, 1.0), vec3(1.0, 0.6, 0.0), (n + 1.0) * 0.5);
    vec3 tint = mix(paper, liquid, interaction);

    float spec = smoothstep(0.7, 0.98, snoise(vUv * 8.0 + displacement * 10.0 + vec2(uTime * 0.2)));
    vec3 color = vec3(texR, texG, texB) * tint;
    color += spec * alpha * interaction * 0.7;

    gl_FragColor = vec4(color, alpha);
}
"#;

/// Quad vertex stage for the background; V grows upward.
pub const GRADIENT_VERTEX: &str = r#"
attribute vec2 position;
varying vec2 vUv;
void main() {
    vUv = position * 0.5 + 0.5;
    gl_Position = vec4(position, 0.0, 1.0);
}
"#;

pub const GRADIENT_FRAGMENT: &str = r#"
precision highp float;
uniform float uTime;
uniform vec2 uResolution;
uniform vec3 uColor1;
uniform vec3 uColor2;
uniform vec3 uColor3;
uniform vec3 uColor4;
uniform float uSpeed;
uniform float uIntensity;
uniform sampler2D uTouchTexture;
uniform float uTouchStrength;
uniform float uGrainIntensity;
uniform vec3 uDarkBase;
uniform float uGradientSize;
uniform float uColor1Weight;
uniform float uColor2Weight;
varying vec2 vUv;

float grain(vec2 uv, float time) {
    vec2 g = uv * uResolution * 0.5;
    return fract(sin(dot(g + time, vec2(12.9898, 78.233))) * 43758.5453) * 2.0 - 1.0;
}

vec3 field(vec2 uv, float time) {
    float t = time * uSpeed;
    vec2 c1 = vec2(0.5 + sin(t * 0.4) * 0.4, 0.5 + cos(t * 0.5) * 0.4);
    vec2 c2 = vec2(0.5 + cos(t * 0.6) * 0.5, 0.5 + sin(t * 0.45) * 0.5);
    vec2 c3 = vec2(0.5 + sin(t * 0.35) * 0.45, 0.5 + cos(t * 0.55) * 0.45);
    vec2 c4 = vec2(0.5 + cos(t * 0.5) * 0.4, 0.5 + sin(t * 0.4) * 0.4);

    float i1 = 1.0 - smoothstep(0.0, uGradientSize, length(uv - c1));
    float i2 = 1.0 - smoothstep(0.0, uGradientSize, length(uv - c2));
    float i3 = 1.0 - smoothstep(0.0, uGradientSize, length(uv - c3));
    float i4 = 1.0 - smoothstep(0.0, uGradientSize, length(uv - c4));

    vec3 color = vec3(0.0);
    color += uColor1 * i1 * (0.6 + 0.4 * sin(t)) * uColor1Weight;
    color += uColor2 * i2 * (0.6 + 0.4 * cos(t * 1.2)) * uColor2Weight;
    color += uColor3 * i3 * (0.6 + 0.4 * sin(t * 0.8)) * uColor1Weight;
    color += uColor4 * i4 * (0.6 + 0.4 * cos(t * 1.3)) * uColor2Weight;

    color = clamp(color, vec3(0.0), vec3(1.0)) * uIntensity;
    float brightness = length(color);
    return mix(uDarkBase, color, max(brightness * 1.2, 0.1));
}

void main() {
    vec2 uv = vUv;
    vec4 touch = texture2D(uTouchTexture, uv);
    vec2 v = -(touch.rg * 2.0 - 1.0);
    uv += v * uTouchStrength * touch.b;

    vec3 color = field(uv, uTime);
    color += grain(uv, uTime) * uGrainIntensity;
    gl_FragColor = vec4(color, 1.0);
}
"#;
